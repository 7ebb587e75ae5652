use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use edit_core::{Editor, InputEvent, Key, Modifiers};

const BURST_CHARS: usize = 1024;
const JUMP_WORDS: usize = 200;

fn seeded_words(words: usize) -> String {
    let mut text = String::with_capacity(words * 5);
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str("word");
    }
    text
}

fn bench_type_burst(c: &mut Criterion) {
    c.bench_function("bench_type_burst", |b| {
        b.iter_batched(
            || {
                let mut ed = Editor::new("", BURST_CHARS);
                ed.set_active(true);
                ed
            },
            |mut ed| {
                for i in 0..BURST_CHARS {
                    ed.apply(InputEvent::typed((b'a' + (i % 26) as u8) as char));
                }
                black_box(ed.cursor());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_word_jumps(c: &mut Criterion) {
    let text = seeded_words(JUMP_WORDS);
    let mut ed = Editor::new(&text, text.len());
    ed.set_active(true);
    c.bench_function("bench_word_jumps", |b| {
        b.iter(|| {
            ed.apply(InputEvent::key(Key::End));
            while ed.cursor() > 0 {
                ed.apply(InputEvent::key_with(Key::Left, Modifiers::CTRL));
            }
            black_box(ed.cursor());
        });
    });
}

fn bench_paste_full_replace(c: &mut Criterion) {
    let text = seeded_words(JUMP_WORDS);
    let mut proto = Editor::new(&text, text.len());
    proto.set_active(true);
    proto.apply(InputEvent::key_with(Key::A, Modifiers::CTRL));
    proto.apply(InputEvent::key_with(Key::C, Modifiers::CTRL));
    proto.clear();

    c.bench_function("bench_paste_full_replace", |b| {
        b.iter_batched(
            || proto.clone(),
            |mut ed| {
                ed.apply(InputEvent::key_with(Key::V, Modifiers::CTRL));
                black_box(ed.buffer().len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_type_burst,
    bench_word_jumps,
    bench_paste_full_replace
);
criterion_main!(benches);
