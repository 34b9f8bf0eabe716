use group_divider_core::model::generation_request::GenerationRequest;
use group_divider_core::model::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows what the core reads and writes
    env_logger::init();

    // A session starts with an empty roster and no current combination file
    let mut session = Session::new();

    // Build the roster; names are trimmed before being stored
    for name in ["Ann", "Bo ", " Cy", "Dee", "Eve"] {
        session.add_participant(name)?;
    }

    // A blank name is refused with a typed validation error
    match session.add_participant("   ") {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("Blank names are rejected: {}", err),
    }

    // Removing needs a selection; the caller decides what is selected
    match session.remove_participant(None) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("Nothing selected: {}", err),
    }

    // Everything the demo writes lands in its own directory
    let output_dir = std::path::Path::new("demo_output");
    std::fs::create_dir_all(output_dir)?;

    // Persist the roster and reload it into the same session
    let roster_path = output_dir.join("roster.csv");
    session.save_roster(&roster_path)?;
    let loaded = session.load_roster(&roster_path)?;
    println!("Roster saved and reloaded ({} participants)", loaded);

    // How many distinct groupings of 2 are possible for 5 participants?
    // This is informational only; generated draws are independent
    println!(
        "{} participants in 2 groups: {} possible groupings",
        session.roster().len(),
        session.count_possible(2)?
    );

    // More groups than participants is refused up front
    match session.count_possible(10) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("10 groups do not fit: {}", err),
    }

    // Generate 5 independent combinations of 2 groups, with progress
    let mut request = GenerationRequest::new(2, 5)?;
    request.set_output_dir(output_dir);
    let outcome = session.generate(&request, |done, total| {
        println!("Generated combination {}/{}", done, total);
    })?;
    println!("Combinations written to {}", outcome.path.display());

    // The generated file became current; list what it holds...
    for label in session.summaries()? {
        println!("{}", label?);
    }

    // ...and read one combination back by index
    let partition = session.partition(2)?;
    println!("Combination 3:\n{}", partition);

    // An index beyond the stored count is a typed error, not a crash
    match session.partition(5) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("Index 5 is out of range: {}", err),
    }

    Ok(())
}
