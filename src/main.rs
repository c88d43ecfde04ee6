fn main() {
    if let Err(e) = babix::app::run() {
        eprintln!("{:#}", e); // pretty anyhow chain
        std::process::exit(1);
    }
}
