use std::path::PathBuf;

use anyhow::Result;
use gpw_scraper::{corpus, Pipeline, ScraperConfig};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gpw-scraper",
    about = "Scrape GPW disclosure texts for a given date into a JSON corpus"
)]
struct Opt {
    /// Date to filter disclosures by, formatted as DD-MM-YYYY
    #[structopt(long)]
    date: String,

    /// Output file for the scraped corpus
    #[structopt(long, default_value = "scraped_articles.json", parse(from_os_str))]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger.
    env_logger::init();

    let opt = Opt::from_args();
    let config = ScraperConfig::from_env()?;

    let pipeline = Pipeline::new(config);
    let report = pipeline.run(&opt.date).await?;

    corpus::save_corpus(&opt.output, &report.corpus)?;
    println!(
        "Scraped data has been saved to {}",
        opt.output.display()
    );

    if !report.failures.is_empty() {
        for failure in &report.failures {
            eprintln!("failed: {}: {}", failure.url, failure.error);
        }
        anyhow::bail!(
            "{} of {} disclosures failed",
            report.failures.len(),
            report.corpus.len()
        );
    }

    Ok(())
}
