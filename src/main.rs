fn main() {
    if let Err(err) = constraint_floorplan::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
