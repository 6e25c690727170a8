use std::io::Cursor;

use ferrite_perceptron::{train, Label, Perceptron, PerceptronError, Session, REFERENCE_SAMPLES};

fn trained() -> Perceptron {
    let mut model = Perceptron::new();
    train(&mut model, &REFERENCE_SAMPLES, 0.1, 1000);
    model
}

/// Drives a session the way the binary does and returns what it printed.
fn run(model: &Perceptron, input: &str) -> (String, Vec<String>) {
    let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut rejected = Vec::new();
    while let Some(query) = session.next() {
        match query {
            Ok(q) => session.respond(model.evaluate(q.in1, q.in2)).unwrap(),
            Err(PerceptronError::InvalidNumber { token }) => rejected.push(token),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    let (_, out) = session.into_inner();
    (String::from_utf8(out).unwrap(), rejected)
}

#[test]
fn classifies_each_pair_until_eof() {
    let model = trained();
    assert_eq!(model.evaluate(6.0, 2.0), Label::One);
    assert_eq!(model.evaluate(4.0, 10.0), Label::Zero);

    let (out, rejected) = run(&model, "6 2\n4 10\n");
    assert!(rejected.is_empty());
    assert_eq!(
        out,
        "\nin1: in2: output: 1\n\n\nin1: in2: output: 0\n\n\nin1: "
    );
}

#[test]
fn recovers_after_garbage() {
    let model = trained();
    let (out, rejected) = run(&model, "six two\n2000 140\n");
    assert_eq!(rejected, vec!["six".to_string()]);
    assert_eq!(out.matches("output: 1").count(), 1);
}
