use criterion::criterion_main;
use criterion::{criterion_group, Criterion};

use b2bpay_core::sign::{pay_sig, user_signature};
use b2bpay_core::uri::with_token_and_signature;

criterion_group!(benches, bench);
criterion_main!(benches);

const URI: &str = "/retail/B2b/getorder";
const BODY: &[u8] = br#"{"mchid":"1230000109","out_trade_no":"1217752501201407033233368018"}"#;

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    group.bench_function("pay_sig", |b| b.iter(|| pay_sig(URI, BODY, "12345")));

    group.bench_function("user_signature", |b| {
        b.iter(|| user_signature(BODY, "session-key"))
    });

    group.bench_function("authorized_uri", |b| {
        b.iter(|| with_token_and_signature(URI, "access-token", BODY, "12345"))
    });

    group.finish()
}
