//! Changelog CLI command
//!
//! Regenerates the changelog for the most recent release and trims it
//! to start at the compare-changes line.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use widgethub_core::changelog::{
    generator_args, ChangelogConfig, ChangelogExtractor, ChangelogSettings, CommandGenerator,
    GitTagSource,
};

#[derive(Parser, Debug)]
pub struct ChangelogCommand {
    /// Changelog file to write (defaults to the configured path)
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// Repository to read tags from and run the generator in
    #[clap(long)]
    pub repo: Option<PathBuf>,

    /// Print the resolved tag range and generator command without running it
    #[clap(long)]
    pub dry_run: bool,
}

impl ChangelogCommand {
    pub async fn execute(self, mut settings: ChangelogSettings) -> Result<()> {
        if let Some(path) = self.path {
            settings.path = Some(path);
        }

        let tags = GitTagSource::new(self.repo.clone());
        let mut generator = CommandGenerator::new(settings.command.clone());
        if let Some(repo) = &self.repo {
            generator = generator.with_working_dir(repo.clone());
        }

        let mut extractor = ChangelogExtractor::new(settings, &tags, &generator);
        if let Some(repo) = self.repo {
            extractor = extractor.with_repo_dir(repo);
        }

        if self.dry_run {
            let config = ChangelogConfig {
                output: true,
                ..extractor
                    .resolve_config()
                    .await
                    .context("Failed to list git tags")?
            };
            print!(
                "{}",
                describe_plan(extractor.settings(), &extractor.changelog_path(), &config)
            );
            return Ok(());
        }

        let outcome = extractor
            .run()
            .await
            .context("Changelog generation failed")?;

        if outcome.trimmed {
            println!("✅ Wrote {}", outcome.path.display());
        } else {
            println!(
                "⚠ Wrote {} (no '{}' line found, left untrimmed)",
                outcome.path.display(),
                extractor.settings().marker
            );
        }
        Ok(())
    }
}

fn display_bound(bound: &str, fallback: &'static str) -> String {
    if bound.is_empty() {
        fallback.to_string()
    } else {
        bound.to_string()
    }
}

fn describe_plan(settings: &ChangelogSettings, path: &Path, config: &ChangelogConfig) -> String {
    let mut command = settings.command.clone();
    command.extend(generator_args(config, path));

    format!(
        "From:    {}\nTo:      {}\nOutput:  {}\nMarker:  {}\nCommand: {}\n",
        display_bound(&config.from, "(start of history)"),
        display_bound(&config.to, "(HEAD)"),
        path.display(),
        settings.marker,
        command.join(" ")
    )
}
