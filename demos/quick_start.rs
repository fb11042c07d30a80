use outcome_rail::prelude::*;

fn load_raw_quota(source: &str) -> Outcome<String> {
    if source == "remote" {
        failure!("quota service unreachable"; "source" => source)
    } else {
        Outcome::success("25".to_string())
    }
}

fn parse_quota(raw: String) -> Outcome<u32> {
    raw.trim()
        .parse::<u32>()
        .outcome_ctx_with(move || context!("parsing quota figure"; "raw" => raw))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. A pipeline that succeeds end to end
    println!("\n1. Success track:");
    let quota = load_raw_quota("cache").then(parse_quota);
    match quota.value() {
        Some(q) => println!("quota = {q}"),
        None => println!("failed: {}", quota.context()),
    }

    // 2. A failure short-circuits past the parse step
    println!("\n2. Failure track:");
    let quota = load_raw_quota("remote").then(parse_quota);
    if quota.is_failure() {
        println!("failed: {}", quota.context());
    }

    // 3. Entering the railway from a plain Result
    println!("\n3. From Result:");
    let port = "8080".parse::<u16>().outcome_ctx("parsing listen port");
    println!("port = {:?}", port.value());
}
