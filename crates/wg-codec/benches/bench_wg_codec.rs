use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wg_codec::{create_embed_url, decode, encode, extract_from_url};
use wg_core::{SettingValue, SettingsMap, WidgetType};

fn calendar_settings(rng: &mut StdRng) -> SettingsMap {
    let mut s = SettingsMap::new();
    s.insert("primaryColor".into(), SettingValue::Text(format!("#{:06x}", rng.gen_range(0..0x100_0000u32))));
    s.insert("backgroundColor".into(), "#f3f4f6".into());
    s.insert("defaultView".into(), "week".into());
    s.insert("showWeekends".into(), rng.gen_bool(0.5).into());
    s.insert("borderRadius".into(), SettingValue::from(rng.gen_range(0..32i64)));
    s.insert("style".into(), "detailed".into());
    s
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let samples: Vec<SettingsMap> = (0..1000).map(|_| calendar_settings(&mut rng)).collect();
    let tokens: Vec<String> = samples.iter().map(|s| encode(&WidgetType::Calendar, s)).collect();

    c.bench_function("encode_calendar_1000", |b| {
        b.iter(|| {
            for s in &samples {
                black_box(encode(&WidgetType::Calendar, black_box(s)));
            }
        })
    });

    c.bench_function("decode_calendar_1000", |b| {
        b.iter(|| {
            for t in &tokens {
                black_box(decode(black_box(t)));
            }
        })
    });

    c.bench_function("decode_garbage_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(decode(black_box("!!!not-base64!!!")));
            }
        })
    });
}

fn bench_urls(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let settings = calendar_settings(&mut rng);
    let url = create_embed_url("https://widgets.example.com", &WidgetType::Calendar, &settings);
    c.bench_function("extract_from_url_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(extract_from_url(black_box(&url)));
            }
        })
    });
}

criterion_group!(benches, bench_encode_decode, bench_urls);
criterion_main!(benches);
