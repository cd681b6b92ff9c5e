use upda_core::models::metric::Metric;
use upda_core::models::packet::{Packet, Sample};
use upda_core::models::score::{MetricResult, MetricScore, PatientScore};

#[test]
fn new_packet_is_empty() {
    let packet = Packet::new();
    assert!(packet.is_empty());
    assert!(packet.samples().is_empty());
    assert!(packet.results().is_empty());
}

#[test]
fn samples_keep_insertion_order_and_duplicates() {
    let mut packet = Packet::new();
    let first = Sample { emg: vec![0.1, 0.2] };
    let second = Sample { emg: vec![0.3] };

    packet.add_sample(first.clone());
    packet.add_sample(second.clone());
    packet.add_sample(first.clone());

    assert_eq!(packet.samples(), &[first.clone(), second, first]);
    assert!(packet.results().is_empty());
    assert!(!packet.is_empty());
}

#[test]
fn results_keep_insertion_order() {
    let mut packet = Packet::new();
    packet.add_result(MetricResult::new(Metric::Rtrem, 40.0, 2.0));
    packet.add_result(MetricResult::new(Metric::Ftap, 75.5, 11.0));

    let metrics: Vec<_> = packet.results().iter().map(|r| r.metric).collect();
    assert_eq!(metrics, vec![Metric::Rtrem, Metric::Ftap]);
    assert!(packet.samples().is_empty());
}

#[test]
fn score_table_from_packet_uses_latest_result() {
    let mut packet = Packet::new();
    packet.add_sample(Sample::default());
    packet.add_result(MetricResult::new(Metric::Htap, 10.0, 1.0));
    packet.add_result(MetricResult::new(Metric::Htap, 55.0, 6.5));
    packet.add_result(MetricResult::new(Metric::Crest, 90.0, 3.0));

    let table = PatientScore::from_packet("patient-7", &packet);

    assert_eq!(table.name, "patient-7");
    assert_eq!(table.score(Metric::Htap), MetricScore::new(55.0, 6.5));
    assert_eq!(table.score(Metric::Crest), MetricScore::new(90.0, 3.0));
    assert_eq!(table.score(Metric::Ftap), MetricScore::default());
}

#[test]
fn empty_packet_gives_blank_table() {
    let table = PatientScore::from_packet("patient-1", &Packet::new());
    assert_eq!(table, PatientScore::blank("patient-1"));
}
