// skein-core - Interpreter integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the Interpreter API: configuration, file loading
//! and error recovery between top-level forms.

mod common;
use common::*;

use std::path::PathBuf;

use skein_core::Config;

/// A temporary source file removed on drop.
struct TempSource {
    path: PathBuf,
}

impl TempSource {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "skein-{}-{}.skn",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        TempSource { path }
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempSource {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[test]
fn test_load_file_method() {
    let file = TempSource::new("method", "(def! inc (fn* (x) (+ x 1)))\n(inc 41) ; last form\n");
    let interp = new_interp();
    assert_eq!(interp.load_file(&file.path).unwrap(), SkeinVal::int(42));
    assert_eq!(interp.eval_str("(inc 1)").unwrap(), SkeinVal::int(2));
}

#[test]
fn test_load_file_builtin() {
    let file = TempSource::new("builtin", "(def! a 1)\n(def! b (+ a 1))\n; trailing comment");
    let interp = new_interp();
    let src = format!("(load-file \"{}\")", file.path_str());
    assert_eq!(interp.eval_str(&src).unwrap(), SkeinVal::Nil);
    assert_eq!(interp.eval_str("b").unwrap(), SkeinVal::int(2));
}

#[test]
fn test_load_file_error_stops_at_failing_form() {
    let file = TempSource::new("partial", "(def! first-ok 1)\n(boom)\n(def! never 2)\n");
    let interp = new_interp();
    assert!(interp.load_file(&file.path).is_err());
    assert_eq!(interp.eval_str("first-ok").unwrap(), SkeinVal::int(1));
    assert!(interp.eval_str("never").is_err());
}

#[test]
fn test_repl_style_recovery() {
    let interp = new_interp();
    assert!(interp.rep("(def! x 10)").is_ok());
    assert!(interp.rep("(undefined)").is_err());
    assert_eq!(interp.rep("(* x 2)").unwrap(), "20");
    assert_eq!(interp.rep("\"s\"").unwrap(), "\"s\"");
}

#[test]
fn test_read_and_eval_separately() {
    let interp = new_interp();
    let form = interp.read("(list 1 2) ignored").unwrap().unwrap();
    assert_eq!(interp.eval(&form).unwrap().to_string(), "(1 2)");
    assert!(interp.read("").unwrap().is_none());
}

#[test]
fn test_eval_all_returns_last() {
    let interp = new_interp();
    assert_eq!(
        interp.eval_all("(def! a 1) (def! b 2) (+ a b)").unwrap(),
        SkeinVal::int(3)
    );
    assert_eq!(interp.eval_all("").unwrap(), SkeinVal::Nil);
}

#[test]
fn test_config_depth_limit() {
    let interp = Interpreter::with_config(Config::default().with_max_eval_depth(20)).unwrap();
    assert_eq!(interp.config().max_eval_depth, 20);
    let deep = format!("{}1{}", "(+ 1 ".repeat(50), ")".repeat(50));
    let err = interp.eval_str(&deep).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded(20)));
    skein_core::set_max_eval_depth(skein_core::DEFAULT_MAX_EVAL_DEPTH);
}

#[test]
fn test_interpreters_have_separate_environments() {
    let a = new_interp();
    let b = new_interp();
    a.eval_str("(def! only-a 1)").unwrap();
    assert!(b.eval_str("only-a").is_err());
}

#[test]
fn test_keywords_are_per_interpreter() {
    let a = new_interp();
    let b = new_interp();
    let ka = a.eval_str(":k").unwrap();
    let kb = b.eval_str(":k").unwrap();
    assert_eq!(ka, a.eval_str("(keyword \"k\")").unwrap());
    assert_ne!(ka, kb);
}
