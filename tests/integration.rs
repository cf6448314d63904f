use genview::parser::{load_file, parse_str};
use genview::query::{Bounds, QueryService};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

// Chromosome lines per generation, counted straight from the text.
fn count_chromosome_lines(content: &str) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    let mut current = None;
    for line in content.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("Generation:") {
            let generation: i64 = rest.trim().parse().unwrap();
            counts.entry(generation).or_insert(0);
            current = Some(generation);
        } else if line.starts_with("Chromosome:") {
            *counts.get_mut(&current.unwrap()).unwrap() += 1;
        }
    }
    counts
}

fn check_log_file(path: &Path) -> Result<(), String> {
    println!("Checking log: {:?}", path);
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let run_log = load_file(path).map_err(|e| format!("Load Error: {}", e))?;

    let expected = count_chromosome_lines(&content);
    if run_log.len() != expected.len() {
        return Err(format!(
            "expected {} generations, parsed {}",
            expected.len(),
            run_log.len()
        ));
    }

    for (generation, record) in run_log.iter() {
        let want = expected.get(&generation).copied().unwrap_or(0);
        if record.population.len() != want {
            return Err(format!(
                "generation {}: expected {} chromosomes, parsed {}",
                generation,
                want,
                record.population.len()
            ));
        }
        // Amplitudes are unit-bounded, so decoded probabilities are too.
        for chromosome in &record.population {
            if chromosome.iter().any(|v| !(0.0..=1.0).contains(v)) {
                return Err(format!(
                    "generation {}: value out of range in {:?}",
                    generation, chromosome
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn check_all_logs() {
    let log_dir = Path::new("tests/logs");
    if !log_dir.exists() {
        panic!("tests/logs directory not found at {:?}", std::env::current_dir());
    }

    let mut failures = Vec::new();
    let mut checked = 0;

    for entry in fs::read_dir(log_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|s| s.to_str()) == Some("log") {
            checked += 1;
            if let Err(e) = check_log_file(&path) {
                failures.push((path, e));
            }
        }
    }

    assert!(checked > 0, "no .log fixtures found");
    if !failures.is_empty() {
        for (path, err) in &failures {
            eprintln!("FAIL: {:?} -> {}", path, err);
        }
        panic!("{} logs failed.", failures.len());
    }
}

#[test]
fn test_knapsack_log_bounds() {
    let run_log = load_file(Path::new("tests/logs/knapsack_small.log")).unwrap();
    let service = QueryService::new(Arc::new(run_log));

    assert_eq!(
        service.bounds().unwrap(),
        Bounds {
            max_generation: 2,
            max_index: 2
        }
    );

    let entry = service.get_chromosome(2, 1).unwrap();
    assert_eq!(entry.fitness, 130);
    assert_eq!(entry.chromosome.len(), 4);
    // "0.93200 + -0.36247j"
    assert!((entry.chromosome[0] - (1.0 - 0.932 * 0.932)).abs() < 1e-12);
}

#[test]
fn test_sparse_generation_keys() {
    let run_log = load_file(Path::new("tests/logs/sparse_generations.log")).unwrap();
    let service = QueryService::new(Arc::new(run_log));

    // Two generations keyed 1 and 5: the count drives max_generation.
    assert_eq!(service.bounds().unwrap().max_generation, 1);
    assert!(service.get_chromosome(5, 0).is_ok());
    assert!(service.get_chromosome(2, 0).is_err());
    assert!(service.get_chromosome(5, 1).is_err());
}

#[test]
fn test_minimal_log_scenario() {
    let run_log = parse_str("Generation:1\nFitness:42\nChromosome:[1.000000+0.000000j]\n").unwrap();
    let service = QueryService::new(Arc::new(run_log));

    assert_eq!(
        service.bounds().unwrap(),
        Bounds {
            max_generation: 0,
            max_index: 0
        }
    );
    let entry = service.get_chromosome(1, 0).unwrap();
    assert_eq!(entry.chromosome, vec![0.0]);
    assert_eq!(entry.fitness, 42);
    assert!(service.get_chromosome(1, 1).is_err());
    assert!(service.get_chromosome(2, 0).is_err());
}
