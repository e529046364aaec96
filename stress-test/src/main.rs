/*
 * Created on Sat Jul 25 2026
 *
 * This file is a part of Skysearch
 * Skysearch is a free and open-source in-memory quick-search engine written
 * by Sayan Nandan ("the Author") with the vision to provide instant,
 * incremental prefix and substring lookups over live datasets without
 * compromising on correctness under concurrency.
 *
 * Copyright (c) 2026, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

#![deny(unused_crate_dependencies)]
#![deny(unused_imports)]

use {
    devtimer::SimpleTimer,
    log::{info, warn},
    rand::{distributions::Alphanumeric, rngs::ThreadRng, Rng},
    skysearch::{score, SearchIndex},
    std::{env, sync::Arc, thread},
};

const DEFAULT_ITEMS: usize = 10_000;
const KEYWORDS_PER_ITEM: usize = 3;
const KEYWORD_LEN: usize = 8;
const CHURN_ROUNDS: usize = 200;
const READER_ROUNDS: usize = 500;

macro_rules! logstress {
    ($stressid:expr, $extra:expr) => {
        log::info!("Stress ({}): {}", $stressid, $extra);
    };
}

fn main() {
    env_logger::Builder::new()
        .parse_filters(&env::var("SKYSEARCH_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();
    warn!("the stress test checks correctness under load and DOES NOT show the true throughput");
    let threads = num_cpus::get();
    let item_count = env::var("SKYSEARCH_STRESS_ITEMS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_ITEMS)
        .max(2);
    info!("running with {threads} threads over {item_count} items");
    let keywords: Arc<Vec<Vec<String>>> = Arc::new({
        let mut rng = rand::thread_rng();
        (0..item_count).map(|_| mkkeywords(&mut rng)).collect()
    });
    stress_fill_walk_drain(threads, &keywords);
    stress_readers_against_churn(threads, &keywords);
    info!("SUCCESS. all stress loops passed");
}

fn mkkeywords(rng: &mut ThreadRng) -> Vec<String> {
    (0..KEYWORDS_PER_ITEM)
        .map(|_| {
            rng.sample_iter(Alphanumeric)
                .take(KEYWORD_LEN)
                .map(char::from)
                .collect::<String>()
                .to_lowercase()
        })
        .collect()
}

/// Fill the index from all threads (stride partitioned), verify every item
/// is reachable through every one of its keywords, then drain from all
/// threads and verify the graph is empty
fn stress_fill_walk_drain(threads: usize, keywords: &Arc<Vec<Vec<String>>>) {
    logstress!("A1", "parallel fill, full walk verification, parallel drain");
    let idx = Arc::new(SearchIndex::new());
    let mut timer = SimpleTimer::new();
    timer.start();
    run_strided(threads, keywords, &idx, |idx, item, kws| {
        idx.register(item, kws.iter().map(|kw| kw.as_str()))
            .expect("tokens are never empty");
    });
    timer.stop();
    info!(
        "fill took {}ms for {} items",
        timer.time_in_millis().unwrap_or(0),
        keywords.len()
    );
    assert_eq!(idx.stats().items, keywords.len());
    let mut timer = SimpleTimer::new();
    timer.start();
    for (item, kws) in keywords.iter().enumerate() {
        for kw in kws {
            let hits = idx.walk_and_score(kw, &score::prefix);
            assert_eq!(hits.get(&item), Some(&1.0), "item {item} lost under {kw}");
        }
    }
    timer.stop();
    info!(
        "walk verification took {}ms",
        timer.time_in_millis().unwrap_or(0)
    );
    let mut timer = SimpleTimer::new();
    timer.start();
    run_strided(threads, keywords, &idx, |idx, item, _| {
        assert!(idx.deregister(&item));
    });
    timer.stop();
    info!("drain took {}ms", timer.time_in_millis().unwrap_or(0));
    assert_eq!(idx.stats().items, 0);
    assert_eq!(idx.stats().fragments, 0);
}

/// Readers hammer walks over a stable half of the items while a writer
/// churns the other half; the stable half must stay reachable throughout
fn stress_readers_against_churn(threads: usize, keywords: &Arc<Vec<Vec<String>>>) {
    logstress!("A2", "reader storm against a churning writer");
    let idx = Arc::new(SearchIndex::new());
    let stable = keywords.len() / 2;
    for (item, kws) in keywords.iter().enumerate() {
        idx.register(item, kws.iter().map(|kw| kw.as_str()))
            .expect("tokens are never empty");
    }
    let writer = {
        let idx = Arc::clone(&idx);
        let keywords = Arc::clone(keywords);
        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for _ in 0..CHURN_ROUNDS {
                let item = rng.gen_range(stable..keywords.len());
                assert!(idx.deregister(&item));
                idx.register(item, keywords[item].iter().map(|kw| kw.as_str()))
                    .expect("tokens are never empty");
            }
        })
    };
    let readers: Vec<_> = (0..threads.max(2))
        .map(|_| {
            let idx = Arc::clone(&idx);
            let keywords = Arc::clone(keywords);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..READER_ROUNDS {
                    let item = rng.gen_range(0..stable);
                    let kws = &keywords[item];
                    let kw = &kws[rng.gen_range(0..kws.len())];
                    let hits = idx.walk_and_score(kw, &score::prefix);
                    assert_eq!(hits.get(&item), Some(&1.0), "stable item {item} lost");
                }
            })
        })
        .collect();
    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }
    run_strided(threads, keywords, &idx, |idx, item, _| {
        assert!(idx.deregister(&item));
    });
    assert_eq!(idx.stats().items, 0);
    assert_eq!(idx.stats().fragments, 0);
}

fn run_strided(
    threads: usize,
    keywords: &Arc<Vec<Vec<String>>>,
    idx: &Arc<SearchIndex<usize>>,
    op: fn(&SearchIndex<usize>, usize, &[String]),
) {
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let idx = Arc::clone(idx);
            let keywords = Arc::clone(keywords);
            thread::spawn(move || {
                let mut item = t;
                while item < keywords.len() {
                    op(&idx, item, &keywords[item]);
                    item += threads;
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("stress worker panicked");
    }
}
