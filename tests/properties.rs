// std imports
use std::collections::HashMap;

// internal imports
use pepfrag::biology::digestion_enzyme::cleavage_rule::CleavageRule;
use pepfrag::chemistry::molecule::PROTON_MASS;
use pepfrag::entities::fragmentation_options::FragmentationSpectrumOptions;
use pepfrag::entities::ion_type::IonType;
use pepfrag::entities::peptide::Peptide;
use pepfrag::entities::terminus::NTerminusGroup;
use pepfrag::errors::peptide_error::PeptideError;
use pepfrag::functions::sequence_formatter::SequenceFormatOptions;
use pepfrag::functions::sequence_parser::SequenceParseOptions;

const TOLERANCE: f64 = 1e-6;

const SEQUENCES: [&str; 5] = [
    "GlyLeuTyr",
    "Ser*@!Gly$#LysTrp",
    "Ser*GlyLys@Leu!Tyr",
    "ProGluProThrIleAspGluLys",
    "Met@Cys!Ser*Thr*Tyr$ArgLysGly#",
];

/// Singly charged b and y ions without shoulder ions or neutral losses
fn plain_b_and_y_ions() -> FragmentationSpectrumOptions {
    let mut options = FragmentationSpectrumOptions::default();
    options.intensity_options.shoulder_ion = 0.0;
    options.double_charge_ions_show = false;
    options.triple_charge_ions_show = false;
    for ion_type in IonType::ALL {
        let ion_type_options = &mut options.ion_type_options[ion_type];
        ion_type_options.show_ion = matches!(ion_type, IonType::B | IonType::Y);
        ion_type_options.neutral_loss_water = false;
        ion_type_options.neutral_loss_ammonia = false;
        ion_type_options.neutral_loss_phosphate = false;
    }
    options
}

fn masses_by_symbol(peptide: &Peptide) -> HashMap<String, f64> {
    peptide
        .get_fragmentation_masses()
        .into_iter()
        .map(|peak| (peak.get_symbol().to_string(), peak.get_mass()))
        .collect()
}

#[test]
fn test_round_trip() {
    let format_options = SequenceFormatOptions::default();
    for sequence in SEQUENCES {
        let mut peptide = Peptide::new();
        peptide
            .set_sequence(sequence, &SequenceParseOptions::default())
            .unwrap();
        let formatted = peptide.get_sequence(&format_options);

        let mut reparsed = Peptide::new();
        reparsed
            .set_sequence(&formatted, &SequenceParseOptions::default())
            .unwrap();

        assert_eq!(peptide.get_residue_count(), reparsed.get_residue_count());
        for (original, copy) in peptide.get_residues().iter().zip(reparsed.get_residues()) {
            assert_eq!(original.get_symbol(), copy.get_symbol());
            assert_eq!(original.get_modification_ids(), copy.get_modification_ids());
            assert_eq!(original.is_phosphorylated(), copy.is_phosphorylated());
        }
        assert!((peptide.get_peptide_mass() - reparsed.get_peptide_mass()).abs() < TOLERANCE);
    }
}

#[test]
fn test_round_trip_with_composed_symbol() {
    let mut peptide = Peptide::new();
    assert!(peptide.get_modification_symbols().get_ambiguous_symbols().is_empty());
    peptide.set_modification_symbol("**", 1.0, false, "").unwrap();
    assert_eq!(
        peptide.get_modification_symbols().get_ambiguous_symbols(),
        vec!["**"]
    );

    // two phosphorylations on one residue read back as the composed symbol
    peptide
        .set_sequence("Ser**Gly", &SequenceParseOptions::default())
        .unwrap();
    let composed = peptide.get_modification_symbol_id("**").unwrap();
    assert_eq!(peptide.get_residues()[0].get_modification_ids(), &[composed]);
}

#[test]
fn test_mass_conservation() {
    let mut peptide = Peptide::new();
    peptide
        .set_sequence("Gly-Leu-Tyr", &SequenceParseOptions::default())
        .unwrap();
    let standard_masses = peptide.get_standard_masses().clone();
    let residue_masses: f64 = peptide
        .get_residues()
        .iter()
        .map(|residue| residue.get_mass())
        .sum();
    assert_eq!(peptide.get_residue_count(), 3);
    assert!(
        (peptide.get_peptide_mass() - (residue_masses + standard_masses.get_water())).abs()
            < TOLERANCE
    );
}

#[test]
fn test_ion_symmetry() {
    for sequence in SEQUENCES {
        let mut peptide = Peptide::new();
        peptide
            .set_sequence(sequence, &SequenceParseOptions::default())
            .unwrap();
        peptide.set_fragmentation_spectrum_options(plain_b_and_y_ions());
        let masses = masses_by_symbol(&peptide);
        let residue_count = peptide.get_residue_count();
        let total_mass = peptide.get_peptide_mass();

        // b1 and the b ion of the last residue are excluded
        for b_number in 2..residue_count - 1 {
            let b_ion_mass = masses[&format!("b{}", b_number)];
            let y_ion_mass = masses[&format!("y{}", residue_count - b_number)];
            assert!(
                (b_ion_mass + y_ion_mass - (total_mass + 2.0 * PROTON_MASS)).abs() < TOLERANCE,
                "b{} + y{} of {}",
                b_number,
                residue_count - b_number,
                sequence
            );
        }
    }
}

#[test]
fn test_ion_symmetry_with_protonated_n_terminus() {
    let mut peptide = Peptide::new();
    let parse_options = SequenceParseOptions {
        n_terminus: NTerminusGroup::HydrogenPlusProton,
        ..SequenceParseOptions::default()
    };
    peptide
        .set_sequence("ProGluProThrIleAspGluLys", &parse_options)
        .unwrap();
    peptide.set_fragmentation_spectrum_options(plain_b_and_y_ions());
    let masses = masses_by_symbol(&peptide);
    let total_mass = peptide.get_peptide_mass();

    for b_number in 2..7 {
        let b_ion_mass = masses[&format!("b{}", b_number)];
        let y_ion_mass = masses[&format!("y{}", 8 - b_number)];
        assert!((b_ion_mass + y_ion_mass - (total_mass + PROTON_MASS)).abs() < TOLERANCE);
    }
}

#[test]
fn test_cleavage_rule() {
    let rule = CleavageRule::new("KR", "P", "-", true);
    assert!(
        rule.check_sequence_against_cleavage_rule("R.AEQDDLANYGPGNGVLPSAGSSISMEK.L", false)
            .0
    );
    assert!(
        !rule.check_sequence_against_cleavage_rule("R.IGASGEHIFIIGVDK.P", false)
            .0
    );
}

#[test]
fn test_tryptic_naming() {
    let trypsin = CleavageRule::trypsin();
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "IGK", 0, false).get_name(), "t1");
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "ANR", 0, false).get_name(), "t2");
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "IGKANR", 0, false).get_name(), "t1.2");
    // not following the rule
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "IG", 0, false).get_name(), "1.2");
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "IG", 0, true).get_name(), "1.3");
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "KANR", 0, false).get_name(), "3.6");
    assert_eq!(trypsin.get_tryptic_name("IGKANR", "KANR", 0, true).get_name(), "3.7");
}

#[test]
fn test_fragment_enumeration_idempotence() {
    let trypsin = CleavageRule::trypsin();
    for protein in ["IGKANR", "MKPLRAKGGRPEK", "KRKRPAAK", "AAAA"] {
        let mut swept = Vec::new();
        let mut start = 0;
        while let Some(fragment) = trypsin.get_tryptic_peptide_next(protein, start) {
            start = fragment.get_end() + 1;
            swept.push(fragment);
        }

        let numbered: Vec<_> = (1..)
            .map_while(|number| trypsin.get_tryptic_peptide_by_fragment_number(protein, number))
            .collect();

        assert_eq!(swept, numbered, "{}", protein);
        assert_eq!(swept, trypsin.get_fragments(protein));
        let joined: String = swept.iter().map(|fragment| fragment.get_sequence()).collect();
        assert_eq!(joined, protein);
    }
}

#[test]
fn test_bounds() {
    let trypsin = CleavageRule::trypsin();
    assert!(trypsin.get_tryptic_peptide_by_fragment_number("IGKANR", 0).is_none());
    assert!(trypsin.get_tryptic_peptide_by_fragment_number("IGKANR", 3).is_none());
    assert!(trypsin.get_tryptic_peptide_next("IGKANR", 6).is_none());

    let name = trypsin.get_tryptic_name("IGK", "IGKANR", 0, false);
    assert!(name.is_empty());
    assert_eq!((name.get_residue_start(), name.get_residue_end()), (0, 0));
    assert!(trypsin.get_tryptic_name("IGKANR", "IGK", 4, false).is_empty());
}

#[test]
fn test_empty_input() {
    let peptide = Peptide::new();
    assert!(peptide.get_fragmentation_masses().is_empty());
    assert_eq!(peptide.get_peptide_mass(), 0.0);

    let mut peptide = Peptide::new();
    assert_eq!(
        peptide.set_sequence("   ", &SequenceParseOptions::default()),
        Err(PeptideError::EmptySequence)
    );
    assert_eq!(peptide.get_residue_count(), 0);
    assert!(peptide.get_fragmentation_masses().is_empty());
}

#[test]
fn test_unknown_residue_emits_zero_mass_peaks() {
    let mut peptide = Peptide::new();
    peptide
        .set_sequence("GXLY", &SequenceParseOptions::one_letter_code())
        .unwrap();
    assert_eq!(peptide.get_residues()[1].get_symbol(), "Xxx");
    assert!(peptide.get_peptide_mass() > 0.0);

    let spectrum = peptide.get_fragmentation_masses();
    let peaks_of = |symbol: &str| -> Vec<f64> {
        spectrum
            .iter()
            .filter(|peak| peak.get_symbol() == symbol)
            .map(|peak| peak.get_mass())
            .collect()
    };
    assert_eq!(peaks_of("a2"), vec![0.0]);
    assert_eq!(peaks_of("b2"), vec![0.0]);
    assert_eq!(peaks_of("y3"), vec![0.0]);
    assert_eq!(peaks_of("Shoulder-b2"), vec![-1.0, 1.0]);
    // the resolved residues around it keep their masses
    assert!(peaks_of("b3")[0] > 0.0);
    assert!(peaks_of("y2")[0] > 0.0);
}
