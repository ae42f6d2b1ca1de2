// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Renders the visible periods as progress bars in the terminal.
//!
//! Settings are read from `workdaySettings.json` in the directory given as the first
//! argument, or the current directory. Runs for 50 refreshes.
//!
//! ```text
//! cargo run -p timeleft_refresh --example terminal -- ./settings
//! ```

use std::fmt::Write as _;
use std::time::Duration;

use tick::Clock;
use timeleft::store::{FileStore, SettingsStore};
use timeleft::{ProgressColors, Rgb, TimeItem, TimeItems, VisibleCards};
use timeleft_refresh::RefreshDriver;
use tokio::sync::watch;

const BAR_WIDTH: usize = 40;
const FRAMES: usize = 50;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let settings = SettingsStore::new(FileStore::new(dir)).load();
    let visible = *settings.visible_cards();

    let (_settings_tx, settings_rx) = watch::channel(settings);
    let active = RefreshDriver::new(Clock::new_tokio(), settings_rx)
        .period(Duration::from_millis(200))
        .activate();
    let mut items = active.subscribe();

    print!("{}", render(&active.latest(), &visible));

    for _ in 0..FRAMES {
        items.changed().await?;
        let frame = render(&items.borrow_and_update(), &visible);
        // Move the cursor back to the top of the previous frame.
        print!("\x1b[{}A{frame}", visible_count(&visible));
    }

    Ok(())
}

fn visible_count(visible: &VisibleCards) -> usize {
    timeleft::PeriodType::ALL.iter().filter(|kind| visible.is_visible(**kind)).count()
}

fn render(items: &TimeItems, visible: &VisibleCards) -> String {
    items.visible(visible).fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "{}", line(item));
        out
    })
}

fn line(item: &TimeItem) -> String {
    let colors = ProgressColors::for_percentage(item.percentage());
    let filled = usize::try_from(item.percentage().clamp(0, 100)).unwrap_or_default() * BAR_WIDTH / 100;

    let remaining = item
        .specs()
        .iter()
        .map(|(unit, value)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:>10} {}{}\x1b[0m {:>3}%  {remaining}\x1b[K",
        item.title(),
        paint(colors.progress(), &"█".repeat(filled)),
        paint(colors.track(), &"░".repeat(BAR_WIDTH - filled)),
        item.percentage(),
    )
}

fn paint(color: Rgb, text: &str) -> String {
    format!("\x1b[38;2;{};{};{}m{text}", color.red, color.green, color.blue)
}
