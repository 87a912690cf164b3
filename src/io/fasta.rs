use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::io::{BufRead, BufReader};

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// 流式 FASTA 解析器。序列行会去掉空白并统一大写；
/// 记录间通过预读的下一条 header 衔接。
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl FastaReader<Box<dyn BufRead>> {
    /// 按路径打开 FASTA 文件，文件名以 .gz 结尾时透明解压。
    pub fn open(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("cannot open FASTA file '{}'", path))?;
        let reader: Box<dyn BufRead> = if path.ends_with(".gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(f)))
        } else {
            Box::new(BufReader::new(f))
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    fn read_line(&mut self) -> Result<usize> {
        self.buf.clear();
        Ok(self.reader.read_line(&mut self.buf)?)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // 找到本条记录的 header：要么是上一条结束时预读到的，要么向前扫
        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                if self.read_line()? == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    break self.buf[1..].trim().to_string();
                }
            },
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // 收集序列行直到下一条 header 或 EOF
        let mut seq: Vec<u8> = Vec::new();
        loop {
            if self.read_line()? == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.buf[1..].trim().to_string());
                break;
            }
            for &b in self.buf.as_bytes() {
                match b {
                    b'\n' | b'\r' | b' ' | b'\t' => {}
                    _ => seq.push(b.to_ascii_uppercase()),
                }
            }
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, b"ACGTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">chr1 desc\r\nAC g t n\r\n acgt\r\n>chr2 \r\n N N N \r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("desc"));
        assert_eq!(r1.seq, b"ACGTNACGT");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"NNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_empty_lines() {
        let data = b"\n\n>chr1\nACGT\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc, None);
        assert_eq!(r1.seq, b"ACGT");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn open_reads_gzip_compressed_fasta() {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b">m1\nGATTACA\n").unwrap();
        let gz = enc.finish().unwrap();

        let path = std::env::temp_dir().join("samatch_fasta_gz_test.fasta.gz");
        std::fs::write(&path, gz).unwrap();

        let mut r = FastaReader::open(path.to_str().unwrap()).unwrap();
        let rec = r.next_record().unwrap().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rec.id, "m1");
        assert_eq!(rec.seq, b"GATTACA");
    }
}
