// std imports
use std::fs::read_to_string;
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;

// 3rd party imports
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use tracing::{debug, info, Level};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

// internal imports
use pepfrag::biology::digestion_enzyme::cleavage_rule::{
    CleavageRule, DEFAULT_NAME_DELIMITER, DEFAULT_TERMINUS_MARKER,
};
use pepfrag::biology::digestion_enzyme::functions::get_enzyme_by_name;
use pepfrag::chemistry::mass_table::{DefaultMassTable, MassMode};
use pepfrag::entities::fragmentation_options::FragmentationSpectrumOptions;
use pepfrag::entities::peptide::Peptide;
use pepfrag::entities::terminus::{CTerminusGroup, NTerminusGroup};
use pepfrag::functions::sequence_formatter::SequenceFormatOptions;
use pepfrag::functions::sequence_parser::{SequenceParseOptions, UnknownModificationPolicy};
use pepfrag::io::modification_symbol_csv::reader::Reader as ModificationReader;

const DEFAULT_MIN_PEPTIDE_LENGTH: usize = 6;
const DEFAULT_MAX_PEPTIDE_LENGTH: usize = 50;
const DEFAULT_MAX_NUMBER_OF_MISSED_CLEAVAGES: usize = 2;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Tsv,
    Json,
}

/// Arguments describing how to read a peptide
#[derive(Debug, clap::Args)]
struct PeptideArgs {
    /// Peptide sequence, three letter code by default, e.g. `GlyLeu*Tyr`
    sequence: String,
    /// Sequence is given in one letter code, e.g. `GL*Y`
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    one_letter: bool,
    /// N-terminal group, either a name (hydrogen, hydrogen-plus-proton, acetyl, pyro-glu,
    /// carbamyl, ptc, none) or a formula, e.g. `C2OH3`
    #[arg(long)]
    n_terminus: Option<String>,
    /// C-terminal group, either a name (hydroxyl, amide, none) or a formula, e.g. `NH2`
    #[arg(long)]
    c_terminus: Option<String>,
    /// CSV file with additional modification symbols
    /// (columns: symbol, mass_delta, indicates_phosphorylation, comment)
    #[arg(long)]
    modifications: Option<String>,
    /// Register unknown modification symbols with a mass delta of 0 instead of ignoring them
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    register_unknown_modifications: bool,
    /// Use average instead of monoisotopic masses
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    average: bool,
}

/// Arguments describing a cleavage rule
#[derive(Debug, clap::Args)]
struct RuleArgs {
    /// Named rule, one of trypsin, lys-c, arg-c, glu-c, peptide-database
    #[arg(long, default_value = "trypsin")]
    rule: String,
    /// Custom residues after which the protease cleaves, overrides the named rule
    #[arg(long)]
    rule_residues: Option<String>,
    /// Custom residues preventing the cleavage when following a rule residue
    #[arg(long, default_value = "")]
    exception_residues: String,
    /// Compare residues case sensitive (custom rules only)
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    case_sensitive: bool,
}

impl RuleArgs {
    fn to_cleavage_rule(&self) -> Result<CleavageRule> {
        if let Some(rule_residues) = &self.rule_residues {
            return Ok(CleavageRule::new(
                rule_residues,
                &self.exception_residues,
                DEFAULT_TERMINUS_MARKER,
                !self.case_sensitive,
            ));
        }
        Ok(get_enzyme_by_name(&self.rule, 0, 0, usize::MAX)?
            .get_cleavage_rule()
            .clone())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the theoretical fragment spectrum of a peptide
    Fragment {
        #[command(flatten)]
        peptide: PeptideArgs,
        /// JSON file with fragmentation spectrum options, missing fields keep their defaults
        #[arg(long)]
        options: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
    /// Prints the mass of a peptide
    Mass {
        #[command(flatten)]
        peptide: PeptideArgs,
        /// Charge, 0 prints the neutral mass
        #[arg(long, default_value_t = 0)]
        charge: u8,
    },
    /// Names a peptide by its position within a protein, e.g. `t3` or `12.20`
    TrypticName {
        /// Protein sequence in one letter code
        protein: String,
        /// Peptide sequence in one letter code
        peptide: String,
        /// Name peptides not following the cleavage rule ICR-2LS compatible
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        icr2ls: bool,
        /// Name all occurrences of the peptide
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        all: bool,
        #[command(flatten)]
        rule_args: RuleArgs,
    },
    /// Prints the fragments of a protein separated at every cleavage site
    Fragments {
        /// Protein sequence in one letter code
        protein: String,
        #[command(flatten)]
        rule_args: RuleArgs,
    },
    /// Digests a protein and prints the peptides with their number of missed cleavages
    Digest {
        /// Protein sequence in one letter code or path to a file containing it
        protein: String,
        /// Enzyme, one of trypsin, lys-c, arg-c, glu-c, peptide-database
        #[arg(long, default_value = "trypsin")]
        enzyme: String,
        /// Min peptide length
        #[arg(long = "min-length", default_value_t = DEFAULT_MIN_PEPTIDE_LENGTH)]
        min_peptide_length: usize,
        /// Maximum peptide length
        #[arg(long = "max-length", default_value_t = DEFAULT_MAX_PEPTIDE_LENGTH)]
        max_peptide_length: usize,
        /// Maximum number of missed cleavages
        #[arg(long = "max-missed-cleavages", default_value_t = DEFAULT_MAX_NUMBER_OF_MISSED_CLEAVAGES)]
        max_number_of_missed_cleavages: usize,
    },
    /// Checks a sequence like `K.PEPTIDER.A` against a cleavage rule
    CheckRule {
        /// Sequence with prefix and suffix residue
        sequence: String,
        /// One end following the rule is sufficient
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        allow_partial: bool,
        #[command(flatten)]
        rule_args: RuleArgs,
    },
}

#[derive(Debug, Parser)]
#[command(name = "pepfrag")]
struct Cli {
    /// Verbosity level
    /// 0 - Error
    /// 1 - Warn
    /// 2 - Info
    /// 3 - Debug
    /// > 3 - Trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Builds the peptide described by the arguments
///
/// # Arguments
/// * `args` - Peptide arguments
///
fn build_peptide(args: &PeptideArgs) -> Result<Peptide> {
    let mass_mode = match args.average {
        true => MassMode::Average,
        false => MassMode::Monoisotopic,
    };
    let mut peptide = Peptide::with_mass_table(Arc::new(DefaultMassTable::new(mass_mode)));

    if let Some(modification_file) = &args.modifications {
        let modifications = ModificationReader::read(Path::new(modification_file))?;
        info!("Read {} modification symbols", modifications.len());
        peptide.add_modification_symbols(modifications);
    }

    let mut parse_options = match args.one_letter {
        true => SequenceParseOptions::one_letter_code(),
        false => SequenceParseOptions::default(),
    };
    if args.register_unknown_modifications {
        parse_options.unknown_modification_policy = UnknownModificationPolicy::Register;
    }
    peptide.set_sequence(&args.sequence, &parse_options)?;

    if let Some(n_terminus) = &args.n_terminus {
        let formula = NTerminusGroup::from_name(n_terminus)
            .map_or(n_terminus.as_str(), |group| group.get_formula());
        peptide.set_n_terminus(formula, None)?;
    }
    if let Some(c_terminus) = &args.c_terminus {
        let formula = CTerminusGroup::from_name(c_terminus)
            .map_or(c_terminus.as_str(), |group| group.get_formula());
        peptide.set_c_terminus(formula, None)?;
    }
    debug!(
        "Parsed peptide {}",
        peptide.get_sequence(&SequenceFormatOptions {
            include_n_and_c_terminii: true,
            ..SequenceFormatOptions::default()
        })
    );
    Ok(peptide)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let verbosity = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(verbosity.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Commands::Fragment {
            peptide,
            options,
            format,
        } => {
            let mut peptide = build_peptide(&peptide)?;
            if let Some(options_file) = options {
                let options: FragmentationSpectrumOptions = serde_json::from_str(
                    &read_to_string(Path::new(&options_file))
                        .with_context(|| format!("Unable to read {}", options_file))?,
                )?;
                peptide.set_fragmentation_spectrum_options(options);
            }
            let spectrum = peptide.get_fragmentation_masses();
            info!("Calculated {} fragment peaks", spectrum.len());
            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(stdout(), &spectrum)?;
                    println!();
                }
                OutputFormat::Tsv => {
                    let mut writer = csv::WriterBuilder::new()
                        .delimiter(b'\t')
                        .from_writer(stdout());
                    for peak in spectrum {
                        writer.serialize(peak)?;
                    }
                    writer.flush()?;
                }
            }
        }
        Commands::Mass { peptide, charge } => {
            let peptide = build_peptide(&peptide)?;
            if peptide.get_peptide_mass() == 0.0 {
                bail!("Peptide contains no residue with a known mass");
            }
            match charge {
                0 => println!("{}", peptide.get_peptide_mass()),
                _ => println!("{}", peptide.get_peptide_mass_mz(charge)),
            }
        }
        Commands::TrypticName {
            protein,
            peptide,
            icr2ls,
            all,
            rule_args,
        } => {
            let cleavage_rule = rule_args.to_cleavage_rule()?;
            let name = match all {
                true => cleavage_rule
                    .get_tryptic_name_multiple_matches(
                        &protein,
                        &peptide,
                        icr2ls,
                        DEFAULT_NAME_DELIMITER,
                    )
                    .get_names()
                    .to_string(),
                false => cleavage_rule
                    .get_tryptic_name(&protein, &peptide, 0, icr2ls)
                    .get_name()
                    .to_string(),
            };
            if name.is_empty() {
                bail!("Peptide {} not found in protein", peptide);
            }
            println!("{}", name);
        }
        Commands::Fragments { protein, rule_args } => {
            let fragments = rule_args.to_cleavage_rule()?.get_fragments(&protein);
            println!(
                "{}",
                fragments
                    .iter()
                    .map(|fragment| fragment.get_sequence())
                    .join(DEFAULT_NAME_DELIMITER)
            );
        }
        Commands::Digest {
            protein,
            enzyme,
            min_peptide_length,
            max_peptide_length,
            max_number_of_missed_cleavages,
        } => {
            let protein = match Path::new(&protein).is_file() {
                true => read_to_string(Path::new(&protein))?
                    .lines()
                    .map(str::trim)
                    .join(""),
                false => protein,
            };
            let enzyme = get_enzyme_by_name(
                &enzyme,
                max_number_of_missed_cleavages,
                min_peptide_length,
                max_peptide_length,
            )?;
            let peptides = enzyme.digest(&protein);
            info!("{} produced {} peptides", enzyme.get_name(), peptides.len());

            let mut writer = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(stdout());
            writer.serialize(("sequence", "missed_cleavages"))?;
            for (sequence, missed_cleavages) in peptides
                .iter()
                .sorted_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
            {
                writer.serialize((sequence, missed_cleavages))?;
            }
            writer.flush()?;
        }
        Commands::CheckRule {
            sequence,
            allow_partial,
            rule_args,
        } => {
            let (matches, rule_match_count) = rule_args
                .to_cleavage_rule()?
                .check_sequence_against_cleavage_rule(&sequence, allow_partial);
            println!("{}\t{}", matches, rule_match_count);
        }
    }
    Ok(())
}
