fn main() {
    if let Err(err) = netgraph_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
