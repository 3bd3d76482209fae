mod app;
mod cli;
mod error_mapping;
mod render;

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use hablame_core::{AppError, Config};
use hablame_lang::{
    english_long_date, season_statement, selected_date_statement, spell_signed, today_statement,
    weather_statement, CalendarFields, PhraseSet, Season, TokenSequence,
};
use serde::Serialize;

use crate::app::App;
use crate::cli::{Cli, Command};
use crate::error_mapping::config_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = hablame_core::init(cli.log_level()) {
        eprintln!("{e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let (config, _) = Config::load_validated(cli.config.as_deref()).map_err(config_error)?;
    let app = App::new(config, cli.lat, cli.lon)?;
    tracing::debug!("Config directory: {}", app.config().config_dir.display());

    let today = Local::now().date_naive();

    match cli.command() {
        Command::Tablero { fecha } => {
            let temperature = app.weather_sample().await.map(|s| s.temperature_celsius);
            let set = PhraseSet::assemble(today, fecha.unwrap_or(today), temperature);

            if cli.json {
                print_json(&set)?;
            } else {
                let report = app.weather_report().await.ok();
                print!(
                    "{}",
                    render::Board {
                        set: &set,
                        weather: report,
                    }
                );
            }

            if cli.escuchar {
                let sentences = [
                    Some(&set.today),
                    set.weather.as_ref(),
                    Some(&set.selected),
                    Some(&set.season),
                ];
                for sentence in sentences.into_iter().flatten() {
                    app.speak(sentence).await?;
                }
            }
        }
        Command::Hoy => {
            let sentence = today_statement(&CalendarFields::from_date(today));
            if !cli.json {
                println!("{}", english_long_date(today));
            }
            emit(&app, &cli, &sentence).await?;
        }
        Command::Fecha { fecha } => {
            let sentence = selected_date_statement(&CalendarFields::from_date(fecha));
            emit(&app, &cli, &sentence).await?;
            emit(&app, &cli, &season_statement(Season::from_date(fecha))).await?;
        }
        Command::Clima => match app.weather_report().await {
            Ok(report) => {
                if !cli.json {
                    println!("{}", render::WeatherLine(report));
                }
                if let Some(sentence) = weather_statement(Some(report.current.temperature)) {
                    emit(&app, &cli, &sentence).await?;
                }
            }
            Err(e) => {
                tracing::debug!("Weather unavailable: {}", e);
                println!("{}", render::WEATHER_PENDING);
                eprintln!("{}", e.user_message());
            }
        },
        Command::Estacion { fecha } => {
            let date: NaiveDate = fecha.unwrap_or(today);
            emit(&app, &cli, &season_statement(Season::from_date(date))).await?;
        }
        Command::Numero { n } => {
            emit(&app, &cli, &spell_signed(n)).await?;
        }
    }

    Ok(())
}

/// Print one sentence (text or JSON) and read it aloud if asked.
async fn emit(app: &App, cli: &Cli, sentence: &TokenSequence) -> Result<(), AppError> {
    if cli.json {
        print_json(sentence)?;
    } else {
        println!("{sentence}");
    }
    if cli.escuchar {
        app.speak(sentence).await?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    println!("{json}");
    Ok(())
}
