//! Run handler: read, parse, deliver.

use super::{Cli, OutputFormat};
use cuecast::{
    ChatTransport, ConsoleProgress, CuecastConfig, CuecastResult, DeliveryProgress,
    DialogueEntry, DispatchReport, Dispatcher, EnvOverrides, ScriptSource, Settings, Sleeper,
    TelegramClient, TokioSleeper, parse_script, print_summary,
};
use std::path::Path;
use tracing::{error, info, instrument};

/// Execute the command line.
///
/// Only configuration problems are returned as errors. Input and delivery
/// problems are reported on the console and end the run normally.
#[instrument(skip_all, fields(dry_run = cli.dry_run))]
pub async fn run(cli: Cli) -> CuecastResult<()> {
    let env = EnvOverrides::from_env();
    let mut settings = Settings::load(cli.config.as_deref(), &env)?;
    if let Some(script) = cli.script {
        settings = settings.with_script_path(script);
    }

    if cli.dry_run {
        preview(&settings, cli.format);
        return Ok(());
    }

    let config = settings.into_config()?;
    info!(config = ?config, "Configuration loaded");

    if let Err(e) = deliver(&config).await {
        error!(error = %e, "Run failed");
        println!("❌ An error occurred: {}", e);
    }

    Ok(())
}

async fn deliver(config: &CuecastConfig) -> CuecastResult<()> {
    let client = TelegramClient::new(config.bot_token().to_string(), config.chat_id().to_string())?
        .with_base_url(config.api_base_url());
    let dispatcher = Dispatcher::new(client, TokioSleeper, *config.retry_policy());

    if let Some(report) = send_script(config.script_path(), &dispatcher, &ConsoleProgress).await? {
        print_summary(&report);
    }

    Ok(())
}

/// Read, parse and dispatch one script.
///
/// Returns `None` without sending anything when the file is missing or holds
/// no dialogue.
async fn send_script<T: ChatTransport, S: Sleeper>(
    path: &Path,
    dispatcher: &Dispatcher<T, S>,
    progress: &dyn DeliveryProgress,
) -> CuecastResult<Option<DispatchReport>> {
    println!("📖 Reading script from {}...", path.display());

    let source = match ScriptSource::read(path) {
        Ok(source) => source,
        Err(e) if e.is_not_found() => {
            println!("❌ Error: File '{}' not found!", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    println!("🔍 Extracting character dialogues...");
    let entries = parse_script(source.text());

    if entries.is_empty() {
        println!("⚠️ No dialogue detected! Check the script format.");
        return Ok(None);
    }

    Ok(Some(dispatcher.dispatch(&entries, progress).await))
}

fn preview(settings: &Settings, format: OutputFormat) {
    let entries = match ScriptSource::read(&settings.script.path) {
        Ok(source) => parse_script(source.text()),
        Err(e) => {
            println!("❌ {}", e.kind);
            return;
        }
    };

    match format {
        OutputFormat::Human => print_entries(&entries),
        OutputFormat::Json => match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("❌ Failed to serialize entries: {}", e),
        },
    }
}

fn print_entries(entries: &[DialogueEntry]) {
    if entries.is_empty() {
        println!("⚠️ No dialogue detected! Check the script format.");
        return;
    }

    for (index, entry) in entries.iter().enumerate() {
        println!("{:>5}  {}", index + 1, entry);
    }
    println!("\n{} messages would be sent.", entries.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cuecast::{
        CuecastErrorKind, NoProgress, RecordingSleeper, RetryPolicy, SendOutcome, TelegramResult,
    };
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatTransport for CountingTransport {
        async fn send_message(&self, _text: &str) -> TelegramResult<SendOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SendOutcome::Delivered)
        }

        fn destination(&self) -> &str {
            "test-chat"
        }
    }

    fn dispatcher() -> Dispatcher<CountingTransport, RecordingSleeper> {
        Dispatcher::new(
            CountingTransport::default(),
            RecordingSleeper::new(),
            RetryPolicy::default(),
        )
    }

    fn script_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    fn calls(dispatcher: &Dispatcher<CountingTransport, RecordingSleeper>) -> usize {
        dispatcher.transport().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_missing_script_ends_without_sending() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher();

        let report = send_script(&dir.path().join("Bee.txt"), &dispatcher, &NoProgress)
            .await
            .unwrap();

        assert!(report.is_none());
        assert_eq!(calls(&dispatcher), 0);
    }

    #[tokio::test]
    async fn test_script_without_cues_ends_without_sending() {
        let file = script_file("According to all known laws\nof aviation,\n(beat)\n");
        let dispatcher = dispatcher();

        let report = send_script(file.path(), &dispatcher, &NoProgress)
            .await
            .unwrap();

        assert!(report.is_none());
        assert_eq!(calls(&dispatcher), 0);
    }

    #[tokio::test]
    async fn test_dialogue_is_dispatched() {
        let file = script_file("BARRY:\nYa like jazz?\nADAM:\nNo.\n");
        let dispatcher = dispatcher();

        let report = send_script(file.path(), &dispatcher, &NoProgress)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(*report.delivered(), 2);
        assert_eq!(calls(&dispatcher), 2);
    }

    #[tokio::test]
    async fn test_unreadable_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher();

        let err = send_script(dir.path(), &dispatcher, &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), CuecastErrorKind::Script(_)));
        assert_eq!(calls(&dispatcher), 0);
    }
}
