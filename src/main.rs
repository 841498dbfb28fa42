use clap::Parser;
use plusvalia_patch::utils::{logger, validation::Validate};
use plusvalia_patch::{CliConfig, FilePatchPipeline, LocalStorage, PatchEngine, PatchError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting plusvalia-patch");
    tracing::debug!("CLI config: {:?}", cli);

    // 解析並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e, None),
    };

    let failure_message = config.patch_set.failure_message.clone();
    let success_message = config.patch_set.success_message.clone();
    tracing::info!(
        "Patch set '{}' -> {}",
        config.patch_set.name,
        config.patch_set.target
    );

    let pipeline = FilePatchPipeline::new(LocalStorage::current_dir(), config);
    let engine = PatchEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            if cli.report_json {
                println!("{}", report.to_json()?);
            } else if report.dry_run {
                println!("(dry run) {}", success_message);
            } else {
                println!("{}", success_message);
            }
        }
        Err(e) => exit_with(&e, Some(&failure_message)),
    }

    Ok(())
}

fn exit_with(e: &PatchError, status_line: Option<&str>) -> ! {
    tracing::error!(
        "Patch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    if let (Some(line), PatchError::SectionNotFound { .. }) = (status_line, e) {
        println!("{}", line);
    }
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code().max(1));
}
