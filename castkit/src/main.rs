use castkit::demo;

fn setup_tracing() {
	use tracing::level_filters::LevelFilter;

	let loglevel = std::env::var("CASTKIT_LOGGING");
	let filter = match loglevel.as_ref().map(|x| x.as_ref()) {
		Ok("T") | Ok("TRACE") => LevelFilter::TRACE,
		Ok("D") | Ok("DEBUG") => LevelFilter::DEBUG,
		Ok("I") | Ok("INFO") => LevelFilter::INFO,
		Ok("W") | Ok("WARN") => LevelFilter::WARN,
		Ok("E") | Ok("ERROR") => LevelFilter::ERROR,
		Ok("O") | Ok("OFF") => LevelFilter::OFF,
		_ => return,
	};

	tracing_subscriber::fmt()
		.with_max_level(filter)
		.with_span_events(tracing_subscriber::fmt::format::FmtSpan::FULL)
		.init();
}

fn main() {
	setup_tracing();

	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	if let Err(err) = demo::run_all(&mut out) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}
