/// Line prefixes written by the GA for each record kind.
pub const GENERATION_PREFIX: &str = "Generation:";
pub const FITNESS_PREFIX: &str = "Fitness:";
pub const CHROMOSOME_PREFIX: &str = "Chromosome:";

/// Characters skipped before the chromosome payload ("Chromosome: ").
pub const CHROMOSOME_PAYLOAD_OFFSET: usize = 12;

#[derive(Debug, PartialEq)]
pub enum LogLine<'a> {
    Generation(&'a str),
    Fitness(&'a str),
    Chromosome(&'a str),
}

/// Classify an already-trimmed line. Integer fields are returned raw so the
/// parser can report failures with a line number.
pub fn classify_line(line: &str) -> Option<LogLine<'_>> {
    if line.starts_with(GENERATION_PREFIX) {
        Some(LogLine::Generation(field_value(line)))
    } else if line.starts_with(FITNESS_PREFIX) {
        Some(LogLine::Fitness(field_value(line)))
    } else if line.starts_with(CHROMOSOME_PREFIX) {
        Some(LogLine::Chromosome(chromosome_payload(line)))
    } else {
        None
    }
}

// Text between the first and second colon.
fn field_value(line: &str) -> &str {
    line.split(':').nth(1).unwrap_or("").trim()
}

fn chromosome_payload(line: &str) -> &str {
    match line.char_indices().nth(CHROMOSOME_PAYLOAD_OFFSET) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}
