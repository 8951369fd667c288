mod directives_tests;

use bel_core::Object;

use crate::printer::ObjectPrinter;

/// Parses `source` and dumps every emitted object, one per line.
fn dump(source: &str) -> String {
    let objects = crate::parse(source).expect("source parses");
    ObjectPrinter::new(&objects).with_shapes(true).dump()
}

fn parse_error(source: &str) -> crate::Error {
    crate::parse(source).expect_err("source should not parse")
}

fn single(source: &str) -> Object {
    let mut objects = crate::parse(source).expect("source parses");
    assert_eq!(objects.len(), 1, "expected one object: {objects:?}");
    objects.remove(0)
}
