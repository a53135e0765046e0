#[cfg(test)]
mod integration_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::{load_config, BannerMode};
    use crate::debugger::{Debugger, DividerStyle};
    use crate::sinks::{CaptureSink, FnSink, WriterSink};
    use crate::traits::Level;

    /// A nested session through a verbose debugger, checked line by line
    #[test]
    fn test_nested_sections_full_transcript() {
        let sink = CaptureSink::new();
        let mut debugger = Debugger::new(sink.clone());

        let outer = debugger.create("build", DividerStyle::Thick);
        outer.info("resolving targets");
        drop(outer);

        let inner = debugger.create("link", DividerStyle::Thin);
        inner.warning("symbol shadowed").error("undefined reference");
        inner.finish();

        debugger.section_mut("build").unwrap().debug("done");
        debugger.finish("build");

        let thick = DividerStyle::Thick.banner();
        let thin = DividerStyle::Thin.banner();
        let expected = vec![
            format!("[build] {thick}"),
            "[build] Debugger Section beginning".to_string(),
            "[build] resolving targets".to_string(),
            format!("  [link] {thin}"),
            "  [link] Debugger Section beginning".to_string(),
            "  [link] symbol shadowed".to_string(),
            "  [link] undefined reference".to_string(),
            "  [link] Debugger Section complete".to_string(),
            format!("  [link] {thin}"),
            "[build] done".to_string(),
            "[build] Debugger Section complete".to_string(),
            format!("[build] {thick}"),
        ];
        assert_eq!(sink.texts(), expected);
        assert!(debugger.is_empty());
    }

    /// Every leveled call produces exactly one line at the matching level
    #[test]
    fn test_leveled_calls_one_line_each() {
        let sink = CaptureSink::new();
        let mut debugger = Debugger::new(sink.clone());
        let section = debugger.create("net", DividerStyle::Star);
        sink.clear();

        let calls = vec![
            ("log", Level::Info),
            ("info", Level::Info),
            ("debug", Level::Info),
            ("warning", Level::Warning),
            ("error", Level::Error),
        ];

        for (method, level) in calls {
            let before = sink.len();
            match method {
                "log" => section.log(method),
                "info" => section.info(method),
                "debug" => section.debug(method),
                "warning" => section.warning(method),
                _ => section.error(method),
            };
            let lines = sink.lines();

            assert_eq!(lines.len(), before + 1, "{method} should emit one line");
            let last = &lines[before];
            assert_eq!(last.level, level, "{method} used the wrong level");
            assert_eq!(last.text, format!("[net] {method}"));
        }
    }

    /// Callback sinks receive each level through its own closure
    #[test]
    fn test_callback_sink_routing() {
        let warnings: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let errors: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let (w, e) = (warnings.clone(), errors.clone());
        let sink = FnSink::new(
            |_| {},
            move |line| w.borrow_mut().push(line.to_string()),
            move |line| e.borrow_mut().push(line.to_string()),
        );
        let mut debugger = Debugger::new(sink);

        let section = debugger.create("db", DividerStyle::Blank);
        section.warning("slow query");
        section.error("connection reset");
        section.finish();

        assert_eq!(*warnings.borrow(), vec!["[db] slow query"]);
        assert_eq!(*errors.borrow(), vec!["[db] connection reset"]);
    }

    /// Sample config files load and shape the output
    #[test]
    fn test_lean_config_file_drives_output() {
        let config = load_config("configs/lean.toml").unwrap();
        assert_eq!(config.banners, BannerMode::Lean);
        assert_eq!(config.default_divider, DividerStyle::Thin);

        let mut debugger = Debugger::with_config(WriterSink::new(Vec::new()), config);
        debugger.create_default("a");
        debugger.create_default("b").info("flat");
        debugger.finish("b");
        debugger.finish("a");

        let text = String::from_utf8(debugger.into_sink().into_inner()).unwrap();
        let thin = DividerStyle::Thin.banner();
        let expected = format!(
            "INFO  [a] {thin}\nINFO  [b] {thin}\nINFO  [b] flat\nINFO  [b] {thin}\nINFO  [a] {thin}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_default_config_file_matches_defaults() {
        let config = load_config("configs/default.yaml").unwrap();
        assert_eq!(config, crate::config::DebuggerConfig::default());
    }

    /// Finishing one of two siblings outdents the other by exactly one
    #[test]
    fn test_sibling_outdent() {
        let mut debugger = Debugger::new(CaptureSink::new());
        debugger.create("parent", DividerStyle::Thick);
        debugger.create("first", DividerStyle::Thin);
        debugger.create("second", DividerStyle::Thin);
        let before = debugger.section("second").unwrap().indentation();

        debugger.finish("first");

        let after = debugger.section("second").unwrap().indentation();
        assert_eq!(after, before - 1);
        assert!(debugger.section("first").is_none());
    }
}
