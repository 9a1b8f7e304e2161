/// Digestion enzymes and cleavage rules
pub mod digestion_enzyme;
