// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{CliError, Result};

// ftools modules
use ftools_build::{dedup_prefix, BuildTree};
use ftools_columns::{
    compare_spectra, fraction_within, read_column_file, scaling_summary, write_comparison,
    write_scaling,
};
use ftools_endl::{parse_selection, DownloadScript, Library, DEFAULT_TEMPLATE};
use ftools_sab::{read_histogram_file, write_histogram_table, EnergyHistogram, ScatterHistogram};
use ftools_testdata::{update, Fixture, Generator, DEFAULT_SUBDIR};
use ftools_utils::{f, linear_grid, log_grid, SliceExt, ValueExt};

// external crates
use clap::{Args, ValueEnum};
use log::{info, warn};

/// Output formats for converted scatter histograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SabFormat {
    /// One line per generation
    Ascii,
    /// Wrapped columns in scientific notation
    Pretty,
    /// Generation index to samples
    Json,
    /// One column per generation
    Csv,
}

impl SabFormat {
    fn extension(&self) -> &'static str {
        match self {
            SabFormat::Ascii | SabFormat::Pretty => "txt",
            SabFormat::Json => "json",
            SabFormat::Csv => "csv",
        }
    }
}

// ! ------------------------------------------------------------------------
// !    Scatter histograms
// ! ------------------------------------------------------------------------

#[derive(Args, Debug)]
pub(crate) struct SabArgs {
    /// Binary scatter histogram dump
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Converted output format
    #[arg(short, long, value_enum, default_value_t = SabFormat::Csv)]
    format: SabFormat,

    /// Converted output path [default: <FILE> with the format extension]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print per-generation statistics
    #[arg(long)]
    stats: bool,

    /// Bin the samples and write the distributions to this CSV file
    #[arg(long, value_name = "PATH")]
    histogram: Option<PathBuf>,

    /// Generations to bin [default: all]
    #[arg(short, long, value_delimiter = ',')]
    generation: Vec<usize>,

    /// Number of energy bins
    #[arg(long, default_value_t = 100)]
    bins: usize,

    /// Lower energy bound [default: smallest sample]
    #[arg(long)]
    emin: Option<f64>,

    /// Upper energy bound [default: largest sample]
    #[arg(long)]
    emax: Option<f64>,

    /// Logarithmic energy bins
    #[arg(long)]
    log: bool,

    /// Add a Maxwellian with this temperature (kT, same units as the samples)
    #[arg(long)]
    kt: Option<f64>,
}

pub(crate) fn sab(args: SabArgs) -> Result<()> {
    let histogram = read_histogram_file(&args.file)?;
    info!("{histogram}");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.file, args.format.extension()));

    match args.format {
        SabFormat::Ascii => ftools_sab::write_ascii(&histogram, &output)?,
        SabFormat::Pretty => ftools_sab::write_ascii_pretty(&histogram, &output)?,
        SabFormat::Json => ftools_sab::write_json(&histogram, &output)?,
        SabFormat::Csv => ftools_sab::write_csv(&histogram, &output)?,
    }
    info!("Wrote {}", output.display());

    if args.stats {
        print_statistics(&histogram)?;
    }

    if let Some(path) = &args.histogram {
        let histograms = bin_generations(&histogram, &args)?;
        write_histogram_table(path, &histograms, args.kt)?;
        info!("Wrote {} distributions to {}", histograms.len(), path.display());
    }

    Ok(())
}

fn print_statistics(histogram: &ScatterHistogram) -> Result<()> {
    if histogram.number_of_samples() == 0 {
        warn!("No samples, nothing to summarise");
        return Ok(());
    }

    println!(
        "{:>10} {:>8} {:>13} {:>13} {:>13} {:>13}",
        "generation", "count", "mean", "std_dev", "min", "max"
    );
    for s in histogram.statistics()? {
        println!(
            "{:>10} {:>8} {:>13} {:>13} {:>13} {:>13}",
            s.generation,
            s.count,
            s.mean.sci(5, 2),
            s.std_dev.sci(5, 2),
            s.min.sci(5, 2),
            s.max.sci(5, 2)
        );
    }
    Ok(())
}

fn bin_generations(histogram: &ScatterHistogram, args: &SabArgs) -> Result<Vec<EnergyHistogram>> {
    let generations = match args.generation.is_empty() {
        true => (0..histogram.number_of_generations()).collect(),
        false => args.generation.clone(),
    };

    let mut selected = Vec::new();
    for g in &generations {
        selected.extend_from_slice(histogram.try_generation(*g)?);
    }

    let emin = match args.emin {
        Some(e) => e,
        None => selected.try_min()?,
    };
    let emax = match args.emax {
        Some(e) => e,
        None => selected.try_max()?,
    };

    let edges = match args.log {
        true => log_grid(emin, emax, args.bins)?,
        false => linear_grid(emin, emax, args.bins)?,
    };

    Ok(generations
        .into_iter()
        .map(|g| histogram.energy_histogram(g, &edges))
        .collect::<ftools_sab::Result<Vec<EnergyHistogram>>>()?)
}

/// Swap the extension, avoiding the input file itself
fn default_output(input: &Path, extension: &str) -> PathBuf {
    let output = input.with_extension(extension);
    match output == input {
        true => input.with_extension(f!("converted.{extension}")),
        false => output,
    }
}

// ! ------------------------------------------------------------------------
// !    Estimator results
// ! ------------------------------------------------------------------------

/// Output formats for estimator tables
#[cfg(feature = "hdf5")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    /// Aligned text columns
    Ascii,
    /// One row per bin
    Csv,
    /// Full table structure
    Json,
}

#[cfg(feature = "hdf5")]
#[derive(Args, Debug)]
pub(crate) struct EstimatorArgs {
    /// HDF5 result store
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Estimator id
    #[arg(short, long, required_unless_present = "list")]
    id: Option<u32>,

    /// Entity id (cell, surface, ...) [default: total over entities]
    #[arg(short, long)]
    entity: Option<u64>,

    /// Name of the bin edge dataset, e.g. "Energy"
    #[arg(short, long)]
    bins: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = TableFormat::Ascii)]
    format: TableFormat,

    /// Output path
    #[arg(short, long, default_value = "estimator.txt")]
    output: PathBuf,

    /// List estimators and entities instead of dumping data
    #[arg(long)]
    list: bool,
}

#[cfg(feature = "hdf5")]
pub(crate) fn estimator(args: EstimatorArgs) -> Result<()> {
    use ftools_estimator::{list_entities, list_estimators, read_estimator, EstimatorRequest};

    if args.list {
        for id in list_estimators(&args.file)? {
            let entities = list_entities(&args.file, id)?;
            println!("estimator {id}: {} entities {:?}", entities.len(), entities);
        }
        return Ok(());
    }

    let id = args
        .id
        .ok_or_else(|| CliError::InvalidArgument("an estimator id is required".into()))?;

    let mut request = EstimatorRequest::new(id);
    if let Some(entity) = args.entity {
        request = request.entity(entity);
    }
    if let Some(name) = &args.bins {
        request = request.bins(name);
    }

    let table = read_estimator(&args.file, &request)?;
    info!("{table}");

    let tables = [table];
    match args.format {
        TableFormat::Ascii => ftools_estimator::write_ascii(&tables, &args.output)?,
        TableFormat::Csv => ftools_estimator::write_csv(&tables, &args.output)?,
        TableFormat::Json => ftools_estimator::write_json(&tables, &args.output)?,
    }
    info!("Wrote {}", args.output.display());
    Ok(())
}

// ! ------------------------------------------------------------------------
// !    Column files
// ! ------------------------------------------------------------------------

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Reference spectrum, e.g. MCNP (energy, value, relative error)
    reference: PathBuf,

    /// Test spectrum, e.g. FaceMC (energy, value, relative error)
    test: PathBuf,

    /// Relative tolerance on matching energies
    #[arg(short, long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Output table
    #[arg(short, long, default_value = "comparison.txt")]
    output: PathBuf,
}

pub(crate) fn compare(args: CompareArgs) -> Result<()> {
    let reference = read_column_file(&args.reference)?.spectrum()?;
    let test = read_column_file(&args.test)?.spectrum()?;

    let rows = compare_spectra(&reference, &test, args.tolerance)?;
    info!(
        "{} points, {:.1}% within 2 sigma",
        rows.len(),
        100.0 * fraction_within(&rows, 2.0)
    );

    write_comparison(&rows, &args.output)?;
    info!("Wrote {}", args.output.display());
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct ScalingArgs {
    /// Timings file with (cores, wall time) columns
    file: PathBuf,

    /// Output table
    #[arg(short, long, default_value = "scaling.txt")]
    output: PathBuf,
}

pub(crate) fn scaling(args: ScalingArgs) -> Result<()> {
    let summary = scaling_summary(&read_column_file(&args.file)?)?;
    if let Some(last) = summary.last() {
        info!(
            "{} cores: speedup {:.2}, efficiency {:.1}%",
            last.cores,
            last.speedup,
            100.0 * last.efficiency
        );
    }

    write_scaling(&summary, &args.output)?;
    info!("Wrote {}", args.output.display());
    Ok(())
}

// ! ------------------------------------------------------------------------
// !    Data acquisition
// ! ------------------------------------------------------------------------

#[derive(Args, Debug)]
pub(crate) struct EndlArgs {
    /// Root URL of the remote archive
    #[arg(long)]
    base_url: String,

    /// Remote path template with {library}, {za}, {symbol} and {z} tokens
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Elements, e.g. "all", "1-10", "H,He,26"
    #[arg(short, long, default_value = "all")]
    elements: String,

    /// Libraries to fetch
    #[arg(short, long, value_delimiter = ',', default_value = "eadl,epdl,eedl")]
    libraries: Vec<Library>,

    /// Directory the script downloads into
    #[arg(short = 'd', long, default_value = "endl")]
    output_dir: PathBuf,

    /// Script path
    #[arg(short, long, default_value = "download_endl.sh")]
    script: PathBuf,
}

pub(crate) fn endl(args: EndlArgs) -> Result<()> {
    let elements = parse_selection(&args.elements)?;

    DownloadScript::new(&args.base_url, &args.output_dir)
        .template(&args.template)
        .libraries(&args.libraries)
        .elements(&elements)
        .write_script(&args.script)?;

    Ok(())
}

// ! ------------------------------------------------------------------------
// !    Build support
// ! ------------------------------------------------------------------------

#[derive(Args, Debug)]
pub(crate) struct InitBuildArgs {
    /// FRENSIE source checkout
    source: PathBuf,

    /// Build directory to create
    build: PathBuf,

    /// Install prefix for the environment script
    #[arg(short, long)]
    prefix: PathBuf,

    /// Extra links in the build directory as NAME=TARGET
    #[arg(short, long, value_parser = parse_link)]
    link: Vec<(String, PathBuf)>,
}

pub(crate) fn init_build(args: InitBuildArgs) -> Result<()> {
    let mut tree = BuildTree::new(&args.source, &args.build, &args.prefix);
    for (name, target) in &args.link {
        tree = tree.link(name, target);
    }
    tree.init()?;
    Ok(())
}

fn parse_link(s: &str) -> std::result::Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, target)) if !name.is_empty() && !target.is_empty() => {
            Ok((name.to_string(), PathBuf::from(target)))
        }
        _ => Err(f!("expected NAME=TARGET, found \"{s}\"")),
    }
}

#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["value", "var"])))]
pub(crate) struct DedupEnvArgs {
    /// Search path to clean up
    value: Option<String>,

    /// Read the search path from this environment variable instead
    #[arg(long, value_name = "NAME")]
    var: Option<String>,

    /// Entry separator
    #[arg(short, long, default_value_t = ':')]
    separator: char,
}

pub(crate) fn dedup_env(args: DedupEnvArgs) -> Result<()> {
    let value = match (&args.value, &args.var) {
        (Some(value), _) => value.clone(),
        (None, Some(name)) => std::env::var(name).unwrap_or_else(|_| {
            warn!("{name} is not set");
            String::new()
        }),
        (None, None) => return Err(CliError::InvalidArgument("nothing to deduplicate".into())),
    };

    println!("{}", dedup_prefix(&value, args.separator));
    Ok(())
}

// ! ------------------------------------------------------------------------
// !    Test data
// ! ------------------------------------------------------------------------

#[derive(Args, Debug)]
pub(crate) struct UpdateTestdataArgs {
    /// Generator executable, e.g. aepr_generator
    #[arg(short, long)]
    generator: PathBuf,

    /// Directory holding cross_sections.xml
    #[arg(short, long)]
    cross_sec_dir: PathBuf,

    /// Prefix of the files the generator writes, e.g. "aepr"
    #[arg(long)]
    file_prefix: String,

    /// Output subdirectory of the cross section directory
    #[arg(long, default_value = DEFAULT_SUBDIR)]
    subdir: String,

    /// Notes stored in the generated tables
    #[arg(long, default_value = "")]
    notes: String,

    /// Let the generator update cross_sections.xml
    #[arg(long)]
    modify_xml: bool,

    /// Directory of the default fixtures
    #[arg(short, long, default_value = "test_files")]
    test_dir: PathBuf,

    /// Fixtures as SYMBOL:Z:ALIAS:OUTPUT [default: H, C, Al, Pb in TEST_DIR]
    #[arg(short, long, value_parser = parse_fixture)]
    fixture: Vec<Fixture>,

    /// Further arguments passed to the generator untouched
    #[arg(last = true)]
    extra: Vec<String>,
}

pub(crate) fn update_testdata(args: UpdateTestdataArgs) -> Result<()> {
    let generator = Generator::new(&args.generator, &args.cross_sec_dir, &args.file_prefix)
        .subdir(&args.subdir)
        .notes(&args.notes)
        .modify_xml(args.modify_xml)
        .extra_args(&args.extra);

    let fixtures = match args.fixture.is_empty() {
        true => Fixture::defaults(&args.test_dir),
        false => args.fixture,
    };

    update(&generator, &fixtures)?;
    Ok(())
}

fn parse_fixture(s: &str) -> std::result::Result<Fixture, String> {
    let parts: Vec<&str> = s.splitn(4, ':').collect();
    match parts.as_slice() {
        [symbol, z, alias, output] if !output.is_empty() => {
            let z = z
                .parse::<u32>()
                .map_err(|_| f!("invalid atomic number \"{z}\""))?;
            Ok(Fixture::new(symbol, z, alias, output))
        }
        _ => Err(f!("expected SYMBOL:Z:ALIAS:OUTPUT, found \"{s}\"")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        assert_eq!(
            default_output(Path::new("dump.bin"), "csv"),
            PathBuf::from("dump.csv")
        );
        assert_eq!(
            default_output(Path::new("dump"), "json"),
            PathBuf::from("dump.json")
        );
        assert_eq!(
            default_output(Path::new("dump.txt"), "txt"),
            PathBuf::from("dump.converted.txt")
        );
    }

    #[test]
    fn links() {
        assert_eq!(
            parse_link("data=/shared/data").unwrap(),
            ("data".to_string(), PathBuf::from("/shared/data"))
        );
        assert!(parse_link("data").is_err());
        assert!(parse_link("=/x").is_err());
    }

    #[test]
    fn fixtures() {
        let fixture = parse_fixture("Pb:82:Pb-Native:test_files/pb.xml").unwrap();
        assert_eq!(fixture.symbol, "Pb");
        assert_eq!(fixture.z, 82);
        assert_eq!(fixture.alias, "Pb-Native");
        assert_eq!(fixture.output, PathBuf::from("test_files/pb.xml"));

        assert!(parse_fixture("Pb:x:Pb-Native:pb.xml").is_err());
        assert!(parse_fixture("Pb:82:Pb-Native").is_err());
    }
}
