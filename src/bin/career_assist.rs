//! career-assist: command-line front end for the analysis backend.
//!
//! Reads `API_BASE_URL` (and optionally `LOG_LEVEL` and the timeout
//! variables) from the environment or a `.env` file.

use anyhow::{Context, Result};
use career_assist_client::{
    Advisory, AnalysisRequest, AnalysisResponse, CareerClient, ClientConfig, Logger, ResumeFile,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "career-assist")]
#[command(about = "Resume checks, HR answers, job analysis and resume tailoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a resume PDF against a job description
    Ats {
        #[arg(long)]
        resume: PathBuf,
        /// Job description text, or @path to read it from a file
        #[arg(long)]
        job_description: String,
    },
    /// Ask a behavioral interview question
    HrQa { query: String },
    /// Analyze the job posting at a URL
    JobPosting { url: String },
    /// Tailor a resume to a posting and produce an application guide
    Tailor {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job_posting_url: String,
        #[arg(long)]
        github_url: String,
        /// Personal statement text, or @path to read it from a file
        #[arg(long)]
        write_up: String,
        /// Print the full backend response as JSON instead of the guide
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("loading configuration")?;
    // stdout carries the rendered answer
    let logger = Logger::with_writer(config.log_level, std::io::stderr);
    logger.install_global()?;
    let client = CareerClient::from_config(&config, logger)?;

    let (request, raw) = build_request(cli.command).await?;
    match client.submit(request).await {
        Ok(response) => Ok(render(response, raw)),
        Err(e) => {
            eprintln!("error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn build_request(command: Command) -> Result<(AnalysisRequest, bool)> {
    let request = match command {
        Command::Ats {
            resume,
            job_description,
        } => {
            let resume = ResumeFile::from_path(&resume).await?;
            let job_description = read_text_arg(&job_description).await?;
            AnalysisRequest::ats_check(resume, job_description)
        }
        Command::HrQa { query } => AnalysisRequest::hr_question(query),
        Command::JobPosting { url } => AnalysisRequest::job_posting(url),
        Command::Tailor {
            resume,
            job_posting_url,
            github_url,
            write_up,
            raw,
        } => {
            let resume = ResumeFile::from_path(&resume).await?;
            let write_up = read_text_arg(&write_up).await?;
            let request =
                AnalysisRequest::resume_tailor(resume, job_posting_url, github_url, write_up);
            return Ok((request, raw));
        }
    };
    Ok((request, false))
}

/// `@path` reads the value from a file; anything else is taken literally.
async fn read_text_arg(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path)),
        None => Ok(value.to_string()),
    }
}

fn render(response: AnalysisResponse, raw: bool) -> ExitCode {
    match response {
        AnalysisResponse::Report(report) => println!("{}", report.as_markdown()),
        AnalysisResponse::Advisory(Advisory::Answer(text)) => println!("{}", text),
        AnalysisResponse::Advisory(Advisory::NoAnswer) => println!("No result."),
        AnalysisResponse::Advisory(Advisory::Unavailable(e)) => {
            println!("No result.");
            eprintln!("warning: {}", e);
        }
        AnalysisResponse::Tailored(tailored) => {
            if raw {
                match serde_json::to_string_pretty(&tailored.raw_response) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", tailored.analysis_markdown());
                if let Err(e) = tailored.resume_data() {
                    eprintln!("warning: tailored resume data is unusable: {}", e);
                }
            }
        }
    }
    ExitCode::SUCCESS
}
