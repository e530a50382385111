use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads the next submission line, dropping the line terminator.
///
/// Invalid UTF-8 is decoded lossily so one garbled line can't end the session.
/// Returns `None` at end of input.
pub async fn next_submission<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
