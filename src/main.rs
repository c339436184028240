use std::{env, process::ExitCode};

use anyhow::{anyhow, Context, Result};

use acm_cert_selector_lib::{certificate_arn, DomainRequest, SelectorConfig};

const USAGE: &str = "usage: acm-cert-selector <domain> [certificate-name]";

fn request_from_args<I>(mut args: I) -> Result<DomainRequest>
where
    I: Iterator<Item = String>,
{
    let domain = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let mut request = DomainRequest::for_domain(domain);
    if let Some(name) = args.next() {
        request = request.with_certificate_key(name);
    }
    if args.next().is_some() {
        return Err(anyhow!(USAGE));
    }
    Ok(request)
}

fn run() -> Result<String> {
    let request = request_from_args(env::args().skip(1))?;
    let config = SelectorConfig::from_env().context("invalid configuration")?;
    Ok(certificate_arn(config, &request)?)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(arn) => {
            println!("{}", arn);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
