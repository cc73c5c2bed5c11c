//! Prometheus counters for the client control channel. Compiled to no-ops without the
//! `prometheus` feature.

use crate::controlchan::{Command, Reply};

#[cfg(feature = "prometheus")]
use lazy_static::*;
#[cfg(feature = "prometheus")]
use prometheus::{IntCounterVec, register_int_counter_vec};

#[cfg(feature = "prometheus")]
lazy_static! {
    static ref FTP_CLIENT_COMMAND_TOTAL: IntCounterVec =
        register_int_counter_vec!("ftp_client_command_total", "Total number of commands sent to servers.", &["command"]).unwrap();
    static ref FTP_CLIENT_REPLY_TOTAL: IntCounterVec =
        register_int_counter_vec!("ftp_client_reply_total", "Total number of reply codes received from servers.", &["range"]).unwrap();
    static ref FTP_CLIENT_TYPE_NEGOTIATION_TOTAL: IntCounterVec = register_int_counter_vec!(
        "ftp_client_type_negotiation_total",
        "Total number of representation type negotiations by outcome.",
        &["result"]
    )
    .unwrap();
}

/// Add a metric for a command sent.
pub(crate) fn add_command_metric(cmd: &Command) {
    #[cfg(feature = "prometheus")]
    {
        let label = cmd.name().to_lowercase();
        FTP_CLIENT_COMMAND_TOTAL.with_label_values(&[label.as_str()]).inc();
    }
    #[cfg(not(feature = "prometheus"))]
    let _ = cmd;
}

/// Add a metric for a reply received.
pub(crate) fn add_reply_metric(reply: &Reply) {
    #[cfg(feature = "prometheus")]
    {
        let range = format!("{}xx", reply.code() / 100 % 10);
        FTP_CLIENT_REPLY_TOTAL.with_label_values(&[range.as_str()]).inc();
    }
    #[cfg(not(feature = "prometheus"))]
    let _ = reply;
}

/// Add a metric for the outcome of a `TYPE` negotiation: `accepted`, `rejected` or `failed`.
pub(crate) fn add_negotiation_metric(result: &str) {
    #[cfg(feature = "prometheus")]
    {
        FTP_CLIENT_TYPE_NEGOTIATION_TOTAL.with_label_values(&[result]).inc();
    }
    #[cfg(not(feature = "prometheus"))]
    let _ = result;
}
