use outcome_rail::{context, Outcome};

fn read_primary(key: &str) -> Outcome<String> {
    Outcome::failure(context!("primary store timed out"; "key" => key))
}

fn read_replica(key: &str) -> Outcome<String> {
    Outcome::success(format!("{key}=cached-value"))
}

fn main() {
    let key = "user:42:settings";

    // then_else runs the second closure with the whole failed outcome,
    // so a fallback can inspect the context before recovering.
    let value = read_primary(key).then_else(
        |found| Outcome::success(found),
        |failed| {
            eprintln!("falling back => {}", failed.context());
            read_replica(key)
        },
    );
    println!("value => {:?}", value.value());

    // or_else is the recovery half alone.
    let value = read_primary(key).or_else(|_| read_replica(key));
    println!("value => {:?}", value.value());

    // A failure-side observer can log without changing the track.
    let done = read_primary(key).then_do_else(
        |found| println!("loaded {found}"),
        |failed| eprintln!("alerting on => {}", failed.context()),
    );
    println!("still failed => {}", done.is_failure());
}
