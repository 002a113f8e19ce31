use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use usb20::{Backend, Device, Libusb20, Native};

#[derive(Parser, Debug)]
#[command(version, about = "List the USB devices reported by libusb20")]
struct Args {
    /// Also print bus, address, speed and mode of each device
    #[arg(short, long)]
    long: bool,

    /// Open and close every device with this transfer buffer size
    #[arg(long, value_name = "TRANSFER_MAX")]
    probe: Option<u16>,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let code = lsusb(Libusb20, &args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

/// Runs the listing and returns the process exit status. Failures end up as
/// a single line on `err`.
fn lsusb<N: Native>(native: N, args: &Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match list(native, args, out) {
        Ok(()) => 0,
        Err(e) => {
            // nowhere left to report a failed write to stderr
            writeln!(err, "lsusb20: {e:#}").ok();
            1
        }
    }
}

fn list<N: Native>(native: N, args: &Args, out: &mut impl Write) -> Result<()> {
    let backend = Backend::with_native(native).context("allocating libusb20 backend")?;
    writeln!(out, "====> backend {backend:?}")?;

    let mut count = 0usize;
    for device in backend.devices() {
        writeln!(out, "{}", device_line(&device, args))?;
        count += 1;
    }
    debug!("listed {count} device(s)");

    backend.release();
    Ok(())
}

fn device_line<N: Native>(device: &Device<'_, N>, args: &Args) -> String {
    let mut line = format!(
        "====> backend: {}, device: {}",
        device.backend_name(),
        device
    );
    if args.long {
        let mode = device
            .mode()
            .map_or_else(|| "?".to_string(), |m| m.to_string());
        line.push_str(&format!(
            ", bus: {}, addr: {}, speed: {}, mode: {}",
            device.bus_number(),
            device.address(),
            device.speed(),
            mode
        ));
    }
    if let Some(transfer_max) = args.probe {
        if let Err(e) = probe(device, transfer_max) {
            warn!("probing {device} failed: {e}");
            line.push_str(&format!(", open failed: {e}"));
        }
    }
    line
}

fn probe<N: Native>(device: &Device<'_, N>, transfer_max: u16) -> usb20::Result<()> {
    device.open(transfer_max)?;
    device.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use usb20::stub::{StubBus, StubDevice};

    fn run(bus: StubBus, argv: &[&str]) -> (u8, String, String) {
        let args = Args::parse_from(std::iter::once("lsusb20").chain(argv.iter().copied()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = lsusb(bus, &args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn no_backend_prints_one_error_line() {
        let (code, out, err) = run(StubBus::unavailable(), &[]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err.lines().count(), 1);
        assert_eq!(err, "lsusb20: allocating libusb20 backend: no backend found\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_stderr_still_exits_1() {
        let args = Args::parse_from(["lsusb20"]);
        let mut out = Vec::new();
        let code = lsusb(StubBus::unavailable(), &args, &mut out, &mut BrokenPipe);
        assert_eq!(code, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_devices_prints_header_only() {
        let (code, out, err) = run(StubBus::new(), &[]);
        assert_eq!(code, 0);
        assert!(err.is_empty());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("====> backend Backend {"));
    }

    #[test]
    fn one_line_per_device() {
        let bus = StubBus::new()
            .with_device(StubDevice::new("ugen0.1", "ugen0.1: <XHCI root HUB> at usbus0"))
            .with_device(StubDevice::new("ugen0.2", "ugen0.2: <Optical Mouse> at usbus0"));
        let log = bus.log();
        let (code, out, _) = run(bus, &[]);
        assert_eq!(code, 0);
        let lines: Vec<_> = out.lines().skip(1).collect();
        assert_eq!(
            lines,
            [
                "====> backend: ugen0.1, device: ugen0.1: <XHCI root HUB> at usbus0",
                "====> backend: ugen0.2, device: ugen0.2: <Optical Mouse> at usbus0",
            ]
        );
        assert_eq!(log.frees.get(), 1);
    }

    #[test]
    fn long_listing() {
        let bus = StubBus::new().with_device(
            StubDevice::new("ugen1.4", "ugen1.4: <Hub> at usbus1")
                .location(1, 4)
                .speed(2),
        );
        let (_, out, _) = run(bus, &["--long"]);
        assert_eq!(
            out.lines().nth(1),
            Some("====> backend: ugen1.4, device: ugen1.4: <Hub> at usbus1, bus: 1, addr: 4, speed: full, mode: host")
        );
    }

    #[test]
    fn probe_failure_is_reported_but_not_fatal() {
        let bus = StubBus::new()
            .with_device(StubDevice::new("ugen0.1", "ok"))
            .with_device(StubDevice::new("ugen0.2", "denied").open_status(-3));
        let (code, out, err) = run(bus, &["--probe", "4096"]);
        assert_eq!(code, 0);
        assert!(err.is_empty());
        let lines: Vec<_> = out.lines().skip(1).collect();
        assert_eq!(lines[0], "====> backend: ugen0.1, device: ok");
        assert_eq!(
            lines[1],
            "====> backend: ugen0.2, device: denied, open failed: LIBUSB20_ERROR_ACCESS (-3): Permissions error"
        );
    }
}
