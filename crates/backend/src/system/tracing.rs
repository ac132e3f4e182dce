use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация системы трассировки (tracing)
///
/// Логи пишутся в:
/// - stderr (с цветами), stdout остаётся под отчёт
/// - logs/dashboard.log рядом с исполняемым файлом (без цветов)
pub fn initialize() -> anyhow::Result<()> {
    // Получаем директорию исполняемого файла
    let log_dir = std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| std::path::Path::new("target").join("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("✗ ERROR: Cannot create log directory {}: {}", log_dir.display(), e);
        eprintln!("  Error kind: {:?}", e.kind());
        return Err(anyhow::anyhow!("Cannot create log directory: {}", e));
    }

    let log_file_path = log_dir.join("dashboard.log");
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("✗ ERROR: Cannot open log file: {}", e);
            eprintln!("  Error kind: {:?}", e.kind());
            eprintln!("  Path: {}", log_file_path.display());
            return Err(anyhow::anyhow!("Cannot open log file: {}", e));
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::debug!("Logging to {}", log_file_path.display());

    Ok(())
}
