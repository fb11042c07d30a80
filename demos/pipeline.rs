use outcome_rail::{failure, Outcome};

fn fetch_order(id: u64) -> Outcome<&'static str> {
    if id == 0 {
        failure!("order {} not found", id)
    } else {
        Outcome::success("order-payload")
    }
}

fn charge(payload: &str) -> Outcome<u64> {
    if payload.is_empty() {
        failure!("empty payload")
    } else {
        Outcome::success(4200)
    }
}

fn main() {
    let mut receipts = Vec::new();

    let done = fetch_order(17)
        .then(charge)
        .then(|cents| Outcome::success(format!("charged {cents} cents")))
        .then_do(|line| receipts.push(line));

    match done.value() {
        Some(_) => println!("receipts => {receipts:?}"),
        None => eprintln!("pipeline failed => {}", done.context()),
    }

    let failed = fetch_order(0).then(charge).then_do(|_| unreachable!());
    eprintln!("pipeline failed => {}", failed.context());
}
