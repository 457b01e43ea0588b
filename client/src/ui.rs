//! Terminal rendering and prompts for the wizard panels

use std::io::{self, BufRead, Write};

use shared::{ChatMessage, InsightKind, RecommendationReport, Sender, WeatherReport};

use crate::i18n::I18n;

/// Section banner shown on each step transition
pub fn banner(title: &str) {
    println!();
    println!("==== {} ====", title);
}

/// Prompt for a line of input; returns the trimmed answer
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn offline_notice(i18n: &I18n) {
    println!("  [{}]", i18n.text("common.offlineNotice"));
}

pub fn render_recommendations(i18n: &I18n, location_label: &str, report: &RecommendationReport) {
    println!(
        "{} {}",
        i18n.text("favorability.title"),
        location_label
    );

    println!("  {}:", i18n.text("favorability.favorable"));
    for crop in &report.favorable {
        println!(
            "    {:<12} {:<12} {}",
            crop.name, crop.favorability, crop.reason
        );
    }

    println!("  {}:", i18n.text("favorability.unfavorable"));
    for crop in &report.unfavorable {
        println!(
            "    {:<12} {:<12} {}",
            crop.name, crop.favorability, crop.reason
        );
    }
}

pub fn render_weather(i18n: &I18n, crop: &str, location_label: &str, report: &WeatherReport) {
    println!("{} {}", i18n.text("weather.title"), crop);
    println!("  {}", location_label);

    let current = &report.current_weather;
    println!(
        "  {}: {}°C  {}%  {}mm  {} km/h  {}",
        i18n.text("weather.current"),
        current.temperature,
        current.humidity,
        current.rainfall,
        current.wind_speed,
        current.condition
    );

    println!("  {}:", i18n.text("weather.forecast"));
    for day in &report.forecast {
        println!(
            "    {:<10} {:>3}°  {:>3}mm  {}",
            day.day, day.temp, day.rain, day.condition
        );
    }

    println!("  {}:", i18n.text("weather.insights"));
    for insight in &report.insights {
        println!("    [{}] {}", insight_badge(&insight.kind), insight.message);
        println!("          -> {}", insight.action);
    }
}

fn insight_badge(kind: &InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "Action Needed",
        InsightKind::Success => "Good",
        InsightKind::Info | InsightKind::Other => "Info",
    }
}

pub fn render_chat_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Bot => "Assistant",
    };
    if message.is_typing {
        println!("  {}: ...", who);
    } else {
        println!("  {}: {}", who, message.content);
    }
}
