//! Output utilities shared by commands

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter that buffers command output into the `minus` pager
///
/// Long outputs such as `log` are collected here and shown with [`page`] once the
/// command has finished writing.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether output should go through the pager rather than straight to stdout
pub fn use_pager(no_pager: bool) -> bool {
    !no_pager && io::stdout().is_terminal()
}

/// Show everything pushed to `pager`, returning once the user quits
pub fn page(pager: Pager) -> anyhow::Result<()> {
    minus::page_all(pager)?;
    Ok(())
}
