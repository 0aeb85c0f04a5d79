//! Console progress output.

use cuecast_delivery::{AbandonReason, DeliveryProgress, DispatchReport};
use cuecast_error::TelegramError;
use std::io::Write;
use std::time::Duration;

/// Prints human-readable progress to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    fn render_bar(sent: usize, total: usize) -> String {
        const WIDTH: usize = 30;
        let filled = if total == 0 { WIDTH } else { sent * WIDTH / total };
        format!(
            "🚀 Progress: [{}{}] {}/{} msg",
            "#".repeat(filled),
            "-".repeat(WIDTH - filled),
            sent,
            total
        )
    }
}

impl DeliveryProgress for ConsoleProgress {
    fn on_start(&self, total: usize) {
        println!("📤 Sending {} messages...\n", total);
        print!("\r{}", Self::render_bar(0, total));
        let _ = std::io::stdout().flush();
    }

    fn on_delivered(&self, sent: usize, total: usize) {
        print!("\r{}", Self::render_bar(sent, total));
        let _ = std::io::stdout().flush();
    }

    fn on_throttled(&self, _index: usize, wait: Duration) {
        println!("\n⚠️ Rate limited! Waiting {} seconds...\n", wait.as_secs_f64());
    }

    fn on_transport_failure(&self, _index: usize, error: &TelegramError, wait: Duration) {
        println!(
            "\n❌ Request failed: {} (retrying in {} seconds)\n",
            error.kind,
            wait.as_secs_f64()
        );
    }

    fn on_abandoned(&self, index: usize, reason: &AbandonReason) {
        println!("\n❌ Error on message {}: {}\n", index + 1, reason);
    }

    fn on_finish(&self, _report: &DispatchReport) {
        println!();
    }
}

/// Print the end-of-run summary, listing every abandoned entry.
pub fn print_summary(report: &DispatchReport) {
    if report.is_complete() {
        println!("✅ Delivered all {} messages.", report.total());
        return;
    }

    println!(
        "⚠️ Delivered {} of {} messages; {} abandoned:",
        report.delivered(),
        report.total(),
        report.abandoned().len()
    );
    for entry in report.abandoned() {
        println!("  #{} {} ({})", entry.index() + 1, entry.text(), entry.reason());
    }
}
