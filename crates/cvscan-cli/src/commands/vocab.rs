use cvscan_core::error::ScanError;
use cvscan_core::vocab::builtin::default_vocabulary;
use cvscan_core::vocab::load_vocabulary;
use std::path::Path;

pub fn list() -> Result<(), ScanError> {
    let v = default_vocabulary()?;

    println!("{} (v{})", v.name, v.version);
    if let Some(ref desc) = v.description {
        println!("{}", desc);
    }
    println!();
    for term in &v.terms {
        println!("  {}", term);
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ScanError> {
    let v = load_vocabulary(file)?;

    println!("Vocabulary '{}' (v{}) is valid.", v.name, v.version);
    println!("  Terms: {}", v.terms.len());

    // Terms that contain another term always report both
    let mut warnings = Vec::new();
    for outer in &v.terms {
        for inner in &v.terms {
            let (o, i) = (outer.to_lowercase(), inner.to_lowercase());
            if o != i && o.contains(&i) {
                warnings.push(format!(
                    "'{}' contains '{}'; resumes mentioning '{}' also match '{}'",
                    outer, inner, outer, inner
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
