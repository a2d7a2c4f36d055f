use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use esparse_parser::{FunctionCache, Parser, ParserOptions};

// A medium-size script with the constructs the parser spends most time on
const JAVASCRIPT_SOURCE: &str = r#"
'use strict';

const DEFAULT_OPTIONS = { retries: 3, timeout: 1000, verbose: false };

class EventEmitter {
    constructor() {
        this.listeners = new Map();
    }

    on(name, listener) {
        const list = this.listeners.get(name) || [];
        list.push(listener);
        this.listeners.set(name, list);
        return this;
    }

    emit(name, ...args) {
        const list = this.listeners.get(name);
        if (!list) {
            return false;
        }
        for (const listener of list) {
            listener.apply(this, args);
        }
        return true;
    }
}

class Client extends EventEmitter {
    constructor(url, options = DEFAULT_OPTIONS) {
        super();
        this.url = url;
        this.options = Object.assign({}, DEFAULT_OPTIONS, options);
        this.pending = [];
    }

    get isIdle() {
        return this.pending.length === 0;
    }

    *requests() {
        for (let i = 0; i < this.pending.length; i++) {
            yield this.pending[i];
        }
    }

    send(payload) {
        const { retries, timeout } = this.options;
        let attempt = 0;
        const run = () => {
            attempt++;
            try {
                this.emit('send', payload, attempt);
            } catch (err) {
                if (attempt < retries) {
                    setTimeout(run, timeout * attempt);
                } else {
                    this.emit('error', err);
                }
            }
        };
        run();
    }
}

function parseHeaders(text) {
    const headers = {};
    text.split(/\r?\n/).forEach(function (line) {
        const index = line.indexOf(':');
        if (index > 0) {
            const [key, value] = [line.slice(0, index), line.slice(index + 1)];
            headers[key.trim().toLowerCase()] = value.trim();
        }
    });
    return headers;
}

function format(template, values) {
    return template.replace(/\{(\w+)\}/g, (match, key) => key in values ? `${values[key]}` : match);
}

outer: for (var i = 0; i < 10; i++) {
    for (var j = 0; j < 10; j++) {
        if (i * j > 20) break outer;
        if ((i + j) % 2) continue outer;
    }
}

switch (typeof module) {
    case 'object':
        module.exports = { Client, parseHeaders, format };
        break;
    default:
        this.Client = Client;
}
"#;

fn bench_parse_program(c: &mut Criterion) {
    c.bench_function("parse_program_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let program = Parser::new(&arena, black_box(JAVASCRIPT_SOURCE)).parse_program();
            black_box(program.is_ok());
        });
    });
}

fn bench_check_syntax(c: &mut Criterion) {
    c.bench_function("check_syntax_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let result = Parser::new(&arena, black_box(JAVASCRIPT_SOURCE)).check_syntax();
            black_box(result.is_ok());
        });
    });
}

fn bench_parse_with_warm_cache(c: &mut Criterion) {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    let _ = Parser::with_cache(&arena, JAVASCRIPT_SOURCE, ParserOptions::default(), cache.clone()).parse_program();

    c.bench_function("parse_program_warm_cache", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::with_cache(&arena, black_box(JAVASCRIPT_SOURCE), ParserOptions::default(), cache.clone());
            black_box(parser.parse_program().is_ok());
        });
    });
}

criterion_group!(benches, bench_parse_program, bench_check_syntax, bench_parse_with_warm_cache);
criterion_main!(benches);
