//! CropWeather AI - farming advisory client
//!
//! Interactive wizard: location, crop favorability, crop selection, weather
//! analysis, yield prediction, plus a chat assistant. Advisory content comes
//! from the remote service; static sample data is substituted when the
//! service cannot be reached.

use chrono::Duration as ChronoDuration;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{
    fallback, Language, RecommendationRequest, Season, WeatherAnalysisRequest,
    YieldPredictionRequest, COMMON_CROPS,
};
use validator::Validate;

use cropweather_client::config::Config;
use cropweather_client::error::{AppError, AppResult};
use cropweather_client::external::{AdvisoryClient, RetryPolicy};
use cropweather_client::i18n::I18n;
use cropweather_client::services::{ChatSession, PanelFetch, WizardController};
use cropweather_client::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cropweather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting CropWeather advisory client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Advisory service: {}", config.api.base_url);

    let mut i18n = I18n::load(&config.i18n)?;
    let client = AdvisoryClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
        RetryPolicy::from(&config.retry),
        ChronoDuration::seconds(config.cache.weather_ttl_secs),
    )?;

    let mut wizard = WizardController::new();

    run_welcome_step(&mut i18n, &mut wizard)?;
    run_location_step(&i18n, &mut wizard)?;
    run_favorability_step(&i18n, &client, &mut wizard).await?;
    run_selection_step(&i18n, &mut wizard)?;
    run_analysis_step(&i18n, &client, &wizard).await?;
    run_yield_step(&i18n, &client, &wizard).await?;
    run_chat(&i18n, &client, &wizard).await?;

    println!("\n{}", i18n.text("common.goodbye"));
    Ok(())
}

fn run_welcome_step(i18n: &mut I18n, wizard: &mut WizardController) -> AppResult<()> {
    ui::banner(&i18n.text("welcome.title"));
    println!("{}", i18n.text("welcome.subtitle"));

    let choice = ui::prompt(&i18n.text("welcome.languagePrompt"))?;
    if let Some(language) = Language::from_code(&choice) {
        i18n.switch_language(language)?;
    }

    ui::prompt(&i18n.text("welcome.getStarted"))?;
    wizard.start()
}

fn run_location_step(i18n: &I18n, wizard: &mut WizardController) -> AppResult<()> {
    ui::banner(&i18n.text("location.title"));
    println!("{}", i18n.text("location.subtitle"));

    loop {
        let district = ui::prompt(&i18n.text("location.districtLabel"))?;
        let state = ui::prompt(&i18n.text("location.stateLabel"))?;
        match wizard.submit_location(&district, &state) {
            Ok(()) => return Ok(()),
            Err(AppError::Validation { message, .. }) => {
                println!("  ! {}", message);
            }
            Err(err) => return Err(err),
        }
    }
}

async fn run_favorability_step(
    i18n: &I18n,
    client: &AdvisoryClient,
    wizard: &mut WizardController,
) -> AppResult<()> {
    ui::banner(&i18n.text("favorability.banner"));

    let location = wizard
        .location()
        .cloned()
        .ok_or_else(|| AppError::InvalidStateTransition("no location answer yet".to_string()))?;
    let request = RecommendationRequest {
        district: location.district.clone(),
        state: location.state.clone(),
    };

    let mut panel = PanelFetch::new();
    panel.begin(request.clone());
    let result = client.crop_recommendations(&request).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "recommendation fetch failed, showing sample data");
    }
    panel.apply(&request, result);
    if panel.state().is_error() {
        panel.substitute_fallback(fallback::fallback_recommendations());
    }

    if let Some(report) = panel.display() {
        ui::render_recommendations(i18n, &wizard.location_label(), report);
    }
    if panel.is_offline() {
        ui::offline_notice(i18n);
    }

    ui::prompt(&i18n.text("favorability.continue"))?;
    wizard.confirm_favorability()
}

fn run_selection_step(i18n: &I18n, wizard: &mut WizardController) -> AppResult<()> {
    ui::banner(&i18n.text("selection.title"));
    println!("{}", i18n.text("selection.subtitle"));
    for row in COMMON_CROPS.chunks(4) {
        println!("  {}", row.join("  "));
    }

    loop {
        let crop = ui::prompt(&i18n.text("selection.cropLabel"))?;
        match wizard.submit_crop(&crop) {
            Ok(()) => return Ok(()),
            Err(AppError::Validation { message, .. }) => {
                println!("  ! {}", message);
            }
            Err(err) => return Err(err),
        }
    }
}

async fn run_analysis_step(
    i18n: &I18n,
    client: &AdvisoryClient,
    wizard: &WizardController,
) -> AppResult<()> {
    ui::banner(&i18n.text("weather.banner"));

    let crop = wizard
        .crop()
        .ok_or_else(|| AppError::InvalidStateTransition("no crop answer yet".to_string()))?
        .to_string();
    let request = WeatherAnalysisRequest {
        location: wizard.location_label(),
        crop: crop.clone(),
    };

    let mut panel = PanelFetch::new();
    panel.begin(request.clone());
    let result = client.weather_analysis(&request).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "weather fetch failed after retries, showing sample data");
    }
    panel.apply(&request, result);
    if panel.state().is_error() {
        panel.substitute_fallback(fallback::fallback_weather());
    }

    if let Some(report) = panel.display() {
        ui::render_weather(i18n, &crop, &wizard.location_label(), report);
    }
    if panel.is_offline() {
        ui::offline_notice(i18n);
    }
    Ok(())
}

async fn run_yield_step(
    i18n: &I18n,
    client: &AdvisoryClient,
    wizard: &WizardController,
) -> AppResult<()> {
    ui::banner(&i18n.text("yieldPrediction.title"));
    println!("{}", i18n.text("yieldPrediction.subtitle"));

    let location = wizard.location();
    let default_state = location.and_then(|l| l.state.clone()).unwrap_or_default();
    let default_district = location.map(|l| l.district.clone()).unwrap_or_default();
    let default_crop = wizard.crop().unwrap_or_default().to_string();

    loop {
        let state = prompt_with_default(i18n, "yieldPrediction.stateLabel", &default_state)?;
        let district =
            prompt_with_default(i18n, "yieldPrediction.districtLabel", &default_district)?;
        let crop = prompt_with_default(i18n, "yieldPrediction.cropLabel", &default_crop)?;

        let seasons: Vec<&str> = Season::ALL.iter().map(Season::name).collect();
        println!("  {}", seasons.join(" / "));
        let season_input = ui::prompt(&i18n.text("yieldPrediction.seasonLabel"))?;
        let season: Season = match season_input.parse() {
            Ok(season) => season,
            Err(msg) => {
                println!("  ! {}", msg);
                continue;
            }
        };

        let area_input = ui::prompt(&i18n.text("yieldPrediction.areaLabel"))?;
        let area = match shared::parse_area(&area_input) {
            Ok(area) => area,
            Err(msg) => {
                println!("  ! {}", msg);
                continue;
            }
        };

        let request = YieldPredictionRequest {
            state,
            district,
            crop,
            season,
            area,
        };
        // Client-side validation gates the single network call
        if let Err(errors) = request.validate() {
            let err = AppError::from(errors);
            println!("  ! {}", err);
            continue;
        }

        match client.yield_prediction(&request).await {
            Ok(prediction) => {
                println!(
                    "{}: {} Tonnes",
                    i18n.text("yieldPrediction.resultTitle"),
                    prediction.predicted_production_tonnes
                );
                return Ok(());
            }
            Err(err) => {
                // No fallback here: a user-specific number has no static substitute
                tracing::warn!(error = %err, "yield prediction failed");
                println!("  ! {}", i18n.text("yieldPrediction.error"));
                let retry = ui::prompt(&i18n.text("yieldPrediction.retryPrompt"))?;
                if !retry.eq_ignore_ascii_case("y") {
                    return Ok(());
                }
            }
        }
    }
}

async fn run_chat(
    i18n: &I18n,
    client: &AdvisoryClient,
    wizard: &WizardController,
) -> AppResult<()> {
    ui::banner(&i18n.text("chatbot.title"));
    println!("{}", i18n.text("chatbot.subtitle"));

    let mut session = ChatSession::new(&wizard.location_label(), wizard.crop());
    for message in session.messages() {
        ui::render_chat_message(message);
    }

    loop {
        let input = ui::prompt(&i18n.text("chatbot.inputLabel"))?;
        if input.is_empty() || input == "/quit" {
            return Ok(());
        }

        let request = match session.push_user(&input) {
            Ok(request) => request,
            Err(AppError::Validation { message, .. }) => {
                println!("  ! {}", message);
                continue;
            }
            Err(err) => return Err(err),
        };

        // Render the optimistic part of the transcript: user message + typing
        for message in session.messages().iter().rev().take(2).rev() {
            ui::render_chat_message(message);
        }

        let reply = client.chat(&request).await.map(|response| response.reply);
        session.resolve_reply(reply);
        if let Some(last) = session.messages().last() {
            ui::render_chat_message(last);
        }
    }
}

fn prompt_with_default(i18n: &I18n, key: &str, default: &str) -> AppResult<String> {
    let label = if default.is_empty() {
        i18n.text(key)
    } else {
        format!("{} [{}]", i18n.text(key), default)
    };
    let answer = ui::prompt(&label)?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}
