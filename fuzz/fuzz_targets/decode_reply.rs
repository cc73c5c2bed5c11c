#![no_main]

use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;
use unftp_reptype::controlchan::FtpClientCodec;

fuzz_target!(|data: &[u8]| {
    let mut codec = FtpClientCodec::new();
    let mut buf = bytes::BytesMut::from(data);
    while let Ok(Some(_)) = codec.decode(&mut buf) {}
});
