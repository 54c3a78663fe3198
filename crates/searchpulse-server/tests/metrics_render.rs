#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use searchpulse_server::obs::metrics::{GaugeSample, ServerMetrics};

#[test]
fn label_values_are_escaped() {
    let m = ServerMetrics::default();
    m.search_requests.inc(&[("product", "say \"hi\"\\\n")]);

    let text = m.render(&[]);
    assert!(text.contains(r#"search_requests_total{product="say \"hi\"\\\n"} 1"#));
}

#[test]
fn label_order_does_not_split_series() {
    let m = ServerMetrics::default();
    m.http_requests.inc(&[("endpoint", "/"), ("method", "GET")]);
    m.http_requests.add(&[("method", "GET"), ("endpoint", "/")], 2);

    assert_eq!(m.http_requests.get(&[("endpoint", "/"), ("method", "GET")]), 3);
    let text = m.render(&[]);
    assert!(text.contains("http_requests_total{endpoint=\"/\",method=\"GET\"} 3"));
}

#[test]
fn histogram_buckets_are_cumulative() {
    let m = ServerMetrics::default();
    let labels = [("endpoint", "/search")];
    m.request_duration.observe(&labels, Duration::from_micros(50));
    m.request_duration.observe(&labels, Duration::from_micros(700));
    m.request_duration.observe(&labels, Duration::from_secs(3));

    assert_eq!(m.request_duration.count(&labels), 3);

    let text = m.render(&[]);
    let name = "http_request_duration_micros";
    assert!(text.contains(&format!("{name}_bucket{{endpoint=\"/search\",le=\"100\"}} 1")));
    assert!(text.contains(&format!("{name}_bucket{{endpoint=\"/search\",le=\"500\"}} 1")));
    assert!(text.contains(&format!("{name}_bucket{{endpoint=\"/search\",le=\"1000\"}} 2")));
    assert!(text.contains(&format!("{name}_bucket{{endpoint=\"/search\",le=\"1000000\"}} 2")));
    assert!(text.contains(&format!("{name}_bucket{{endpoint=\"/search\",le=\"+Inf\"}} 3")));
    assert!(text.contains(&format!("{name}_sum{{endpoint=\"/search\"}} 3000750")));
    assert!(text.contains(&format!("{name}_count{{endpoint=\"/search\"}} 3")));
}

#[test]
fn draining_and_extra_gauges_render() {
    let m = ServerMetrics::default();
    assert!(!m.is_draining());
    m.set_draining();
    assert!(m.is_draining());

    let text = m.render(&[GaugeSample {
        name: "searchpulse_tracked_terms",
        help: "Distinct search terms recorded since start",
        value: 7,
    }]);
    assert!(text.contains("searchpulse_draining 1"));
    assert!(text.contains("# TYPE searchpulse_tracked_terms gauge"));
    assert!(text.contains("searchpulse_tracked_terms 7"));
}
