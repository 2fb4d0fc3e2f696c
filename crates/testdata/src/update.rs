// standard library
use std::io::IsTerminal;

// crate modules
use crate::error::{Error, Result};
use crate::fixture::Fixture;
use crate::generator::Generator;

// ftools modules
use ftools_utils::{f, OptionExt};

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, error, info};

/// Regenerate every fixture in order
///
/// Stops at the first nuclide the generator fails on and returns
/// [Error::GenerationFailed]. Fixtures updated before the failure are kept.
///
/// ```rust, no_run
/// # use ftools_testdata::{update, Fixture, Generator};
/// let generator = Generator::new("aepr_generator", "/data/xs", "aepr");
/// update(&generator, &Fixture::defaults("./test_files")).unwrap();
/// ```
pub fn update(generator: &Generator, fixtures: &[Fixture]) -> Result<()> {
    if fixtures.is_empty() {
        return Err(Error::NoFixtures);
    }

    info!(
        "Regenerating {} fixtures with {}",
        fixtures.len(),
        generator.executable.display()
    );

    let show_progress = std::io::stderr().is_terminal();
    let mut progress_bar = init_progress_bar(fixtures.len(), show_progress)?;
    for fixture in fixtures {
        progress_bar.set_description(&fixture.symbol);
        update_fixture(generator, fixture)?;
        progress_bar.update(1)?;
    }

    if show_progress {
        eprintln!();
    }

    info!("All fixtures regenerated");
    Ok(())
}

/// Run the generator for one fixture and copy the result into place
pub fn update_fixture(generator: &Generator, fixture: &Fixture) -> Result<()> {
    debug!("{fixture}: {:?}", generator.args(fixture));
    let status = generator.command(fixture).status()?;

    if !status.success() {
        error!("{}", failure_banner(fixture, status.code()));
        return Err(Error::GenerationFailed {
            nuclide: fixture.symbol.clone(),
            code: status.code(),
        });
    }

    let generated = generator.generated_file(fixture);
    if !generated.is_file() {
        return Err(Error::MissingOutput(generated));
    }

    if let Some(parent) = fixture.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(&generated, &fixture.output)?;
    debug!("{} -> {}", generated.display(), fixture.output.display());

    Ok(())
}

fn failure_banner(fixture: &Fixture, code: Option<i32>) -> String {
    let rule = "*".repeat(60);
    f!(
        "{rule}\n  Test data generation FAILED for {fixture}\n  exit status: {}\n{rule}",
        code.display()
    )
}

fn init_progress_bar(total: usize, show: bool) -> Result<Bar> {
    BarBuilder::default()
        .total(total)
        .unit(" nuclides")
        .disable(!show)
        .bar_format("{desc} {count}/{total} [{elapsed}]   ")
        .build()
        .map_err(Error::ProgressBar)
}
