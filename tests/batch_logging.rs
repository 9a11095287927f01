use rpn_calc::Calculator;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn batch_logs_one_warning_per_failed_expression() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut calculator = Calculator::new();
    let results = calculator.evaluate_batch(&["2 3 +", "1 0 /", "5 1 -"]);

    assert_eq!(results[0], 5.0);
    assert!(results[1].is_nan());
    assert_eq!(results[2], 4.0);

    let records = LOGGER.records.lock().unwrap();
    let warnings: Vec<&String> = records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("1 0 /"));
    assert!(warnings[0].contains("division by zero"));
}
