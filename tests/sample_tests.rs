use jtir::config::Config;
use jtir::{sample, summarize, Printer};

fn config(iterations: u64) -> Config {
    Config {
        iteration_limit: iterations,
        ..Config::default()
    }
}

#[test]
fn sample_summary() {
    let config = config(10);
    let sample = sample::build(&config).unwrap();
    let summary = summarize(&sample.program, sample.root, &sample.hierarchy, &config);

    assert_eq!(summary.complexity, 234);
    assert_eq!(summary.depth, 3);
    assert!(summary.admitted);

    let functions: Vec<(&str, u64)> = summary
        .functions
        .iter()
        .map(|f| (f.name.as_str(), f.complexity))
        .collect();
    assert_eq!(
        functions,
        vec![
            ("Base::int compute(int)", 2),
            ("Derived::int compute(int)", 2),
            ("Test::int run()", 230),
        ]
    );
}

#[test]
fn counted_loop_scales_with_iterations() {
    for n in [1, 10, 1_000] {
        let config = config(n);
        let sample = sample::build(&config).unwrap();
        assert_eq!(sample.program.complexity(sample.root, &sample.hierarchy), 84 + 15 * n);
    }
}

#[test]
fn flatten_removes_the_idle_while() {
    let config = config(10);
    let mut sample = sample::build(&config).unwrap();
    let removed = sample.program.flatten_idle_loops(sample.root, &sample.hierarchy).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(sample.program.complexity(sample.root, &sample.hierarchy), 194);
    assert_eq!(sample.program.count_depth(sample.root), 3);

    let text = Printer::new().print(&sample.program, sample.root);
    assert!(!text.contains("while ((j > 0))"));
    assert!(text.contains("        int j;\n        j = 10;\n        int k;\n        k = 0;\n        do {"));
    assert!(text.contains("} while ((k < 3));"));
}

#[test]
fn printed_sample_shape() {
    let config = config(10);
    let sample = sample::build(&config).unwrap();
    let text = Printer::new().print(&sample.program, sample.root);

    assert!(text.starts_with("    public int compute(int x) {\n        return (x * 2);\n    }"));
    assert!(text.contains(
        "        int i;\n        int acc;\n        Base obj;\n        i = 0;\n        obj = new Derived();\n        acc = 0;\n"
    ));
    assert!(text.contains("        int j;\n        j = 10;\n        while ((j > 0)) {"));
    assert!(text.contains("        for (; (i < 10); ) {\n            acc += obj.compute(i);\n            i++;\n        }"));
    assert!(text.contains("        while ((j > 0)) {\n            j--;\n        }"));
    assert!(text.ends_with("        return acc;\n    }"));
}

#[test]
fn tight_budget_rejects_sample() {
    let config = Config {
        complexity_limit: 100,
        ..config(10)
    };
    let sample = sample::build(&config).unwrap();
    let summary = summarize(&sample.program, sample.root, &sample.hierarchy, &config);
    assert!(!summary.admitted);
}
