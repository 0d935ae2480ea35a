use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, Naming};

pub fn setup_logging() {
    Logger::try_with_env_or_str("info")
        .unwrap()
        .log_to_file(FileSpec::default().directory("logs"))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(1),
        )
        .start()
        .unwrap();
}
