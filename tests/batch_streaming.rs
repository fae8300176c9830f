use strata::{ClassSchema, Record, ResampleConfig, ResampleError, ResampleFilter};

fn build_record(id: &str, class: usize) -> Record {
    Record::new(id, class, vec![0.5])
}

fn ready_filter() -> ResampleFilter {
    let mut filter = ResampleFilter::new(ResampleConfig::new()).expect("valid config");
    filter.set_schema(ClassSchema::new(2));
    filter
}

#[test]
fn filter_rejects_calls_until_a_schema_is_established() {
    let mut filter = ResampleFilter::new(ResampleConfig::new()).expect("valid config");
    assert!(matches!(
        filter.input(build_record("r0", 0)),
        Err(ResampleError::SchemaNotEstablished)
    ));
    assert!(matches!(
        filter.batch_finished(),
        Err(ResampleError::SchemaNotEstablished)
    ));

    filter.set_schema(ClassSchema::new(2));
    assert!(filter.input(build_record("r0", 0)).is_ok());
}

#[test]
fn first_batch_is_buffered_then_drained_fifo() {
    let mut filter = ready_filter();
    for i in 0..10 {
        let available = filter.input(build_record(&format!("r{i}"), i % 2)).unwrap();
        assert!(!available);
        assert_eq!(filter.pending_output(), 0);
    }

    let has_output = filter.batch_finished().unwrap();
    assert!(has_output);
    let pending = filter.pending_output();
    assert_eq!(pending, 10);

    let mut drained = 0;
    while filter.pop_output().is_some() {
        drained += 1;
    }
    assert_eq!(drained, pending, "drain yields exactly the queued records");
    assert!(filter.pop_output().is_none());
}

#[test]
fn second_batch_passes_through_unchanged_in_input_order() {
    let mut filter = ready_filter();
    for i in 0..6 {
        filter.input(build_record(&format!("first{i}"), i % 2)).unwrap();
    }
    filter.batch_finished().unwrap();
    while filter.pop_output().is_some() {}

    let second_ids: Vec<String> = (0..4).map(|i| format!("second{i}")).collect();
    for (i, id) in second_ids.iter().enumerate() {
        let available = filter.input(build_record(id, i % 2)).unwrap();
        assert!(available, "pass-through records are immediately available");
    }
    let has_output = filter.batch_finished().unwrap();
    assert!(has_output);

    let mut streamed = Vec::new();
    while let Some(record) = filter.pop_output() {
        streamed.push(record.id);
    }
    assert_eq!(streamed, second_ids);
}

#[test]
fn pass_through_keeps_missing_class_records() {
    let mut filter = ready_filter();
    filter.input(build_record("first", 0)).unwrap();
    filter.batch_finished().unwrap();
    while filter.pop_output().is_some() {}

    filter
        .input(Record::with_missing_class("unlabeled", vec![9.0]))
        .unwrap();
    let record = filter.pop_output().expect("pass-through record");
    assert_eq!(record.id, "unlabeled");
    assert_eq!(record.class, None);
    assert_eq!(record.payload, vec![9.0]);
}

#[test]
fn empty_first_batch_reports_no_output() {
    let mut filter = ready_filter();
    let has_output = filter.batch_finished().unwrap();
    assert!(!has_output);
    assert!(filter.is_first_batch_done());
    assert!(filter.pop_output().is_none());
}

#[test]
fn all_missing_class_first_batch_resamples_to_empty() {
    let mut filter = ready_filter();
    for i in 0..3 {
        filter
            .input(Record::with_missing_class(format!("u{i}"), vec![]))
            .unwrap();
    }
    let has_output = filter.batch_finished().unwrap();
    assert!(!has_output);
    let stats = filter.last_stats().expect("stats recorded");
    assert_eq!(stats.classed, 0);
    assert_eq!(stats.excluded, 3);
    assert_eq!(stats.output_len, 0);
}

#[test]
fn only_the_first_batch_is_ever_resampled() {
    // A biased config makes resampling observable: the first batch is
    // rebalanced, while the second must come back exactly as fed.
    let config = ResampleConfig::new().with_bias_to_uniform(1.0);
    let mut filter = ResampleFilter::new(config).expect("valid config");
    filter.set_schema(ClassSchema::new(2));

    for i in 0..8 {
        filter.input(build_record(&format!("first{i}"), 0)).unwrap();
    }
    for i in 0..2 {
        filter.input(build_record(&format!("first_minority{i}"), 1)).unwrap();
    }
    filter.batch_finished().unwrap();
    let mut first_counts = [0usize; 2];
    while let Some(record) = filter.pop_output() {
        first_counts[record.class.expect("classed output")] += 1;
    }
    assert_eq!(first_counts, [5, 5], "first batch is rebalanced");

    for i in 0..5 {
        filter.input(build_record(&format!("second{i}"), 0)).unwrap();
    }
    filter.batch_finished().unwrap();
    let mut second = Vec::new();
    while let Some(record) = filter.pop_output() {
        second.push(record.id);
    }
    assert_eq!(
        second,
        (0..5).map(|i| format!("second{i}")).collect::<Vec<_>>(),
        "second batch is untouched"
    );
}

#[test]
fn begin_batch_abandons_a_finished_batch() {
    let mut filter = ready_filter();
    filter.input(build_record("r0", 0)).unwrap();
    filter.batch_finished().unwrap();
    assert_eq!(filter.pending_output(), 1);

    filter.begin_batch();
    assert_eq!(filter.pending_output(), 0);

    // The filter stays usable for further pass-through batches.
    filter.input(build_record("r1", 1)).unwrap();
    assert_eq!(filter.pop_output().unwrap().id, "r1");
}
