use counter_core::{CounterConfig, CounterEngine, CounterHost, CounterOptions};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

struct BenchHost {
    len: usize,
    class: String,
    text: String,
}

impl CounterHost for BenchHost {
    type Element = u32;

    fn contains(&self, _: u32) -> bool {
        true
    }

    fn value_len(&self, _: u32) -> usize {
        self.len
    }

    fn max_length(&self, _: u32) -> Option<i64> {
        None
    }

    fn create_counter(&mut self, _: u32, class: &str, text: &str) -> Option<u32> {
        self.update_counter(2, class, text);
        Some(2)
    }

    fn update_counter(&mut self, _: u32, class: &str, text: &str) {
        self.class.clear();
        self.class.push_str(class);
        self.text.clear();
        self.text.push_str(text);
    }

    fn listen(&mut self, _: u32) {}
}

fn bench_update(c: &mut Criterion) {
    let mut host = BenchHost {
        len: 0,
        class: String::new(),
        text: String::new(),
    };
    let options = CounterOptions::new(CounterConfig::default())
        .element(1)
        .on_field_warning(|_, remaining| {
            black_box(remaining);
        });
    let Ok(mut engine) = CounterEngine::attach(&mut host, options) else {
        panic!("attach failed");
    };

    c.bench_function("update_state_sweep", |b| {
        b.iter(|| {
            for len in 0..=120 {
                host.len = len;
                black_box(engine.update_state(&mut host));
            }
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
