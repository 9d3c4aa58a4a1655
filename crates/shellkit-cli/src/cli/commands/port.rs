//! `shellkit port` - TCP reachability probes.

use anyhow::Result;
use colored::Colorize;
use shellkit::net::{PortProber, DEFAULT_PROBE_TIMEOUT};
use std::time::Duration;
use tabled::Tabled;

use super::Context;
use crate::cli::args::PortArgs;
use crate::cli::batch::{self, Outcome};
use crate::output;

#[derive(Tabled)]
struct ProbeRow {
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Port")]
    port: u16,
    #[tabled(rename = "Status")]
    status: String,
}

pub async fn execute(ctx: &Context, args: PortArgs) -> Result<Outcome> {
    let hosts = batch::inputs(args.hosts)?;
    let timeout = args
        .timeout
        .or(ctx.config.port_timeout_ms)
        .map_or(DEFAULT_PROBE_TIMEOUT, Duration::from_millis);
    let prober = PortProber::new().timeout(timeout)?;
    let mut batch = ctx.batch();

    let mut records = Vec::new();
    for host in &hosts {
        for (port, result) in args.ports.iter().zip(prober.probe_ports(host, &args.ports).await) {
            if let Some(probe) = batch.record(&format!("{host}:{port}"), result) {
                records.push(probe);
            }
        }
    }

    output::emit(ctx.output_format, &records, |records| {
        let rows = records.iter().map(|p| ProbeRow {
            host: p.host.clone(),
            protocol: p.protocol.to_string(),
            port: p.port,
            status: if p.open {
                "open".green().to_string()
            } else {
                "closed".red().to_string()
            },
        });
        println!("{}", output::table(rows));
    })?;

    Ok(batch.finish())
}
