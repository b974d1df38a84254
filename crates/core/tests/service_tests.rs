// ═══════════════════════════════════════════════════════════════════
// Service Tests — PriceSeriesGenerator, AnalyticsService,
// ChartService, PortfolioService
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::chart::{ChartWindow, TrendDirection};
use portfolio_dashboard_core::models::holding::{Holding, TickerInfo};
use portfolio_dashboard_core::models::price::{round2, PricePoint};
use portfolio_dashboard_core::models::settings::{GeneratorSettings, Settings};
use portfolio_dashboard_core::services::analytics_service::AnalyticsService;
use portfolio_dashboard_core::services::chart_service::ChartService;
use portfolio_dashboard_core::services::generator_service::{
    default_tickers, PriceSeriesGenerator, DEFAULT_TICKERS,
};
use portfolio_dashboard_core::services::portfolio_service::PortfolioService;

// ═══════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn as_of() -> NaiveDate {
    make_date(2025, 6, 27)
}

fn seeded_settings(seed: u64) -> GeneratorSettings {
    GeneratorSettings {
        seed: Some(seed),
        as_of: Some(as_of()),
        ..Default::default()
    }
}

fn generator(seed: u64) -> PriceSeriesGenerator {
    PriceSeriesGenerator::new(seeded_settings(seed)).unwrap()
}

fn simple_holding(symbol: &str, shares: u32, avg: f64, current: f64) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        display_name: symbol.to_string(),
        share_count: shares,
        average_cost: avg,
        current_price: current,
        trend_series: vec![],
        detail_series: vec![],
    }
}

/// A weekly series of `len` points whose close is 100 + index, high/low ±1.
fn linear_series(len: usize) -> Vec<PricePoint> {
    (0..len)
        .map(|i| {
            let close = 100.0 + i as f64;
            PricePoint {
                date: make_date(2024, 1, 5) + chrono::Days::new(7 * i as u64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100_000 + i as u64,
            }
        })
        .collect()
}

fn holding_with_series(symbol: &str, detail: Vec<PricePoint>, trend: Vec<f64>) -> Holding {
    let current_price = detail.last().map(|p| p.close).unwrap_or(0.0);
    Holding {
        symbol: symbol.to_string(),
        display_name: symbol.to_string(),
        share_count: 10,
        average_cost: 100.0,
        current_price,
        trend_series: trend,
        detail_series: detail,
    }
}

// ═══════════════════════════════════════════════════════════════════
// PriceSeriesGenerator
// ═══════════════════════════════════════════════════════════════════

mod price_series_generator {
    use super::*;

    #[test]
    fn default_universe() {
        let tickers = default_tickers();
        assert_eq!(tickers.len(), DEFAULT_TICKERS.len());
        assert_eq!(tickers[0], TickerInfo::new("AAPL", "Apple Inc."));
        assert_eq!(tickers[9], TickerInfo::new("CRM", "Salesforce Inc."));
    }

    #[test]
    fn one_holding_per_ticker_in_input_order() {
        let tickers = default_tickers();
        let holdings = generator(1).generate(&tickers).unwrap();
        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        let expected: Vec<&str> = DEFAULT_TICKERS.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(generator(1).generate(&[]).unwrap().is_empty());
    }

    #[test]
    fn detail_series_shape() {
        let holdings = generator(2).generate(&default_tickers()).unwrap();
        for h in &holdings {
            assert_eq!(h.detail_series.len(), 52);
            assert_eq!(h.trend_series.len(), 12);
            assert_eq!(h.detail_series.last().unwrap().date, as_of());
            for pair in h.detail_series.windows(2) {
                assert_eq!((pair[1].date - pair[0].date).num_days(), 7);
            }
        }
    }

    #[test]
    fn every_point_is_consistent() {
        for seed in 0..20 {
            let holdings = generator(seed).generate(&default_tickers()).unwrap();
            for h in &holdings {
                for p in &h.detail_series {
                    assert!(p.is_consistent(), "{} {:?}", h.symbol, p);
                    assert!(p.low <= p.open.min(p.close));
                    assert!(p.high >= p.open.max(p.close));
                }
                assert!(h.trend_series.iter().all(|v| v.is_finite() && *v > 0.0));
            }
        }
    }

    #[test]
    fn current_price_is_last_close() {
        let holdings = generator(3).generate(&default_tickers()).unwrap();
        for h in &holdings {
            let last = h.detail_series.last().unwrap();
            assert_eq!(h.current_price, round2(last.close));
        }
    }

    #[test]
    fn prices_are_rounded_to_cents() {
        let holdings = generator(4).generate(&default_tickers()).unwrap();
        for h in &holdings {
            assert_eq!(h.average_cost, round2(h.average_cost));
            for p in &h.detail_series {
                assert_eq!(p.open, round2(p.open));
                assert_eq!(p.high, round2(p.high));
                assert_eq!(p.low, round2(p.low));
                assert_eq!(p.close, round2(p.close));
            }
        }
    }

    #[test]
    fn draws_stay_within_configured_bounds() {
        let s = seeded_settings(5);
        let holdings = PriceSeriesGenerator::new(s.clone())
            .unwrap()
            .generate(&default_tickers())
            .unwrap();
        for h in &holdings {
            assert!(h.share_count >= s.shares_min && h.share_count <= s.shares_max);
            // average cost is the rounded base price
            assert!(h.average_cost >= s.base_price_min && h.average_cost <= s.base_price_max);
            for p in &h.detail_series {
                assert!(p.volume >= s.volume_min && p.volume <= s.volume_max);
            }
        }
    }

    #[test]
    fn baseline_stays_near_base_price() {
        // With drift in [-10%, 30%), seasonal 5%, noise 5%, jitter 1% and
        // wicks 2%, every price lies within [0.75, 1.45] × base.
        let holdings = generator(6).generate(&default_tickers()).unwrap();
        for h in &holdings {
            let base = h.average_cost;
            for p in &h.detail_series {
                assert!(p.low >= base * 0.75 - 0.01, "{} low {} base {}", h.symbol, p.low, base);
                assert!(p.high <= base * 1.45 + 0.01, "{} high {} base {}", h.symbol, p.high, base);
            }
        }
    }

    #[test]
    fn same_seed_same_output() {
        let a = generator(42).generate(&default_tickers()).unwrap();
        let b = generator(42).generate(&default_tickers()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generator(42).generate(&default_tickers()).unwrap();
        let b = generator(43).generate(&default_tickers()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn injected_rng_matches_seeded_settings() {
        let tickers = default_tickers();
        let from_settings = generator(11).generate(&tickers).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let injected = generator(999).generate_with_rng(&tickers, &mut rng).unwrap();
        assert_eq!(from_settings, injected);
    }

    #[test]
    fn unseeded_generation_still_valid() {
        let settings = GeneratorSettings {
            as_of: Some(as_of()),
            ..Default::default()
        };
        let holdings = PriceSeriesGenerator::new(settings)
            .unwrap()
            .generate(&default_tickers())
            .unwrap();
        assert_eq!(holdings.len(), 10);
        assert!(holdings
            .iter()
            .all(|h| h.detail_series.iter().all(PricePoint::is_consistent)));
    }

    #[test]
    fn trend_series_is_independent_of_detail_series() {
        // The trend series is not a resample: its samples need not match any detail close.
        let holdings = generator(8).generate(&default_tickers()).unwrap();
        let any_mismatch = holdings.iter().any(|h| {
            let closes: Vec<f64> = h.detail_series.iter().map(|p| p.close).collect();
            h.trend_series.iter().any(|v| !closes.contains(v))
        });
        assert!(any_mismatch);
    }

    #[test]
    fn single_point_series() {
        let settings = GeneratorSettings {
            detail_points: 1,
            trend_points: 1,
            ..seeded_settings(9)
        };
        let holdings = PriceSeriesGenerator::new(settings)
            .unwrap()
            .generate(&default_tickers())
            .unwrap();
        for h in &holdings {
            assert_eq!(h.detail_series.len(), 1);
            assert_eq!(h.trend_series.len(), 1);
            assert_eq!(h.detail_series[0].date, as_of());
            assert_eq!(h.current_price, h.detail_series[0].close);
        }
    }

    #[test]
    fn zero_noise_model_is_pure_trend() {
        let settings = GeneratorSettings {
            seasonal_amplitude_pct: 0.0,
            noise_pct: 0.0,
            open_jitter_pct: 0.0,
            wick_pct: 0.0,
            ..seeded_settings(10)
        };
        let holdings = PriceSeriesGenerator::new(settings)
            .unwrap()
            .generate(&default_tickers())
            .unwrap();
        for h in &holdings {
            for p in &h.detail_series {
                assert_eq!(p.open, p.high);
                assert_eq!(p.open, p.low);
                assert_eq!(p.open, p.close);
            }
        }
    }

    #[test]
    fn custom_interval_and_length() {
        let settings = GeneratorSettings {
            detail_points: 30,
            detail_interval_days: 1,
            ..seeded_settings(12)
        };
        let holdings = PriceSeriesGenerator::new(settings)
            .unwrap()
            .generate(&[TickerInfo::new("AAPL", "Apple Inc.")])
            .unwrap();
        let series = &holdings[0].detail_series;
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, make_date(2025, 5, 29));
        assert_eq!(series[29].date, as_of());
    }

    #[test]
    fn new_rejects_invalid_settings() {
        let settings = GeneratorSettings {
            detail_points: 0,
            ..Default::default()
        };
        assert!(matches!(
            PriceSeriesGenerator::new(settings),
            Err(CoreError::InvalidSettings(_))
        ));
    }

    #[test]
    fn as_of_defaults_to_today() {
        let g = PriceSeriesGenerator::new(GeneratorSettings::default()).unwrap();
        assert_eq!(g.as_of(), chrono::Utc::now().date_naive());
    }
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsService
// ═══════════════════════════════════════════════════════════════════

mod analytics {
    use super::*;

    #[test]
    fn single_holding_scenario() {
        let svc = AnalyticsService::new();
        let holdings = vec![simple_holding("AAPL", 10, 100.0, 120.0)];
        assert_eq!(svc.total_market_value(&holdings), 1200.0);
        assert_eq!(svc.total_unrealized_pnl(&holdings), 200.0);
        assert_eq!(svc.total_cost_basis(&holdings), 1000.0);
    }

    #[test]
    fn empty_collection_is_zero() {
        let svc = AnalyticsService::new();
        assert_eq!(svc.total_market_value(&[]), 0.0);
        assert_eq!(svc.total_unrealized_pnl(&[]), 0.0);
        assert_eq!(svc.total_cost_basis(&[]), 0.0);
    }

    #[test]
    fn totals_are_linear_sums() {
        let svc = AnalyticsService::new();
        let holdings = vec![
            simple_holding("AAPL", 10, 100.0, 120.0),
            simple_holding("MSFT", 5, 300.0, 280.5),
            simple_holding("NVDA", 3, 90.25, 130.75),
        ];
        let expected_value: f64 = 10.0 * 120.0 + 5.0 * 280.5 + 3.0 * 130.75;
        let expected_pnl: f64 =
            10.0 * (120.0 - 100.0) + 5.0 * (280.5 - 300.0) + 3.0 * (130.75 - 90.25);
        assert_eq!(svc.total_market_value(&holdings), expected_value);
        assert_eq!(svc.total_unrealized_pnl(&holdings), expected_pnl);
    }

    #[test]
    fn summary_totals_and_return() {
        let svc = AnalyticsService::new();
        let holdings = vec![
            simple_holding("AAPL", 10, 100.0, 120.0),
            simple_holding("MSFT", 10, 100.0, 80.0),
        ];
        let summary = svc.get_portfolio_summary(&holdings, "USD");
        assert_eq!(summary.currency, "USD");
        assert_eq!(summary.holding_count, 2);
        assert_eq!(summary.total_market_value, 2000.0);
        assert_eq!(summary.total_cost_basis, 2000.0);
        assert_eq!(summary.total_unrealized_pnl, 0.0);
        assert_eq!(summary.total_return_pct, 0.0);
    }

    #[test]
    fn summary_sorted_by_allocation() {
        let svc = AnalyticsService::new();
        let holdings = vec![
            simple_holding("AAPL", 1, 100.0, 100.0),
            simple_holding("MSFT", 3, 100.0, 100.0),
        ];
        let summary = svc.get_portfolio_summary(&holdings, "USD");
        assert_eq!(summary.holdings[0].symbol, "MSFT");
        assert_eq!(summary.holdings[0].allocation_pct, 75.0);
        assert_eq!(summary.holdings[1].symbol, "AAPL");
        assert_eq!(summary.holdings[1].allocation_pct, 25.0);
    }

    #[test]
    fn summary_ties_sorted_by_symbol() {
        let svc = AnalyticsService::new();
        let holdings = vec![
            simple_holding("MSFT", 1, 100.0, 100.0),
            simple_holding("AAPL", 1, 100.0, 100.0),
        ];
        let summary = svc.get_portfolio_summary(&holdings, "USD");
        assert_eq!(summary.holdings[0].symbol, "AAPL");
        assert_eq!(summary.holdings[1].symbol, "MSFT");
    }

    #[test]
    fn summary_per_holding_figures() {
        let svc = AnalyticsService::new();
        let holdings = vec![simple_holding("AAPL", 10, 100.0, 120.0)];
        let summary = svc.get_portfolio_summary(&holdings, "EUR");
        let row = &summary.holdings[0];
        assert_eq!(row.share_count, 10);
        assert_eq!(row.market_value, 1200.0);
        assert_eq!(row.cost_basis, 1000.0);
        assert_eq!(row.unrealized_pnl, 200.0);
        assert_eq!(row.return_pct, 20.0);
        assert_eq!(row.allocation_pct, 100.0);
        assert_eq!(summary.total_return_pct, 20.0);
        assert_eq!(summary.currency, "EUR");
    }

    #[test]
    fn empty_summary() {
        let summary = AnalyticsService::new().get_portfolio_summary(&[], "USD");
        assert_eq!(summary.holding_count, 0);
        assert_eq!(summary.total_market_value, 0.0);
        assert_eq!(summary.total_return_pct, 0.0);
        assert!(summary.holdings.is_empty());
    }

    #[test]
    fn zero_value_holdings_have_zero_allocation() {
        let svc = AnalyticsService::new();
        let holdings = vec![simple_holding("ZERO", 5, 10.0, 0.0)];
        let summary = svc.get_portfolio_summary(&holdings, "USD");
        assert_eq!(summary.holdings[0].allocation_pct, 0.0);
        assert_eq!(summary.total_unrealized_pnl, -50.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService — windowing
// ═══════════════════════════════════════════════════════════════════

mod chart_windowing {
    use super::*;

    #[test]
    fn three_month_window_of_full_year() {
        let h = holding_with_series("AAPL", linear_series(52), vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::ThreeMonths);
        assert_eq!(view.points.len(), 13);
        assert_eq!(view.points, h.detail_series[39..].to_vec());
        // closes 139..=151, so low 138, high 152
        assert_eq!(view.price_min, 138.0);
        assert_eq!(view.price_max, 152.0);
        assert_eq!(view.price_range, 14.0);
        assert_eq!(view.symbol, "AAPL");
        assert_eq!(view.window, ChartWindow::ThreeMonths);
    }

    #[test]
    fn bounds_only_cover_the_window() {
        let mut series = linear_series(52);
        // A spike outside the window must not leak into the bounds
        series[0].high = 10_000.0;
        series[0].low = 1.0;
        let h = holding_with_series("AAPL", series, vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::SixMonths);
        assert_eq!(view.points.len(), 26);
        assert_eq!(view.price_max, 152.0);
        assert_eq!(view.price_min, 125.0);
    }

    #[test]
    fn full_window_returns_whole_series() {
        let h = holding_with_series("AAPL", linear_series(52), vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::OneYear);
        assert_eq!(view.points, h.detail_series);
    }

    #[test]
    fn short_series_returns_everything() {
        let h = holding_with_series("AAPL", linear_series(5), vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::SixMonths);
        assert_eq!(view.points.len(), 5);
        assert_eq!(view.points, h.detail_series);
    }

    #[test]
    fn empty_series_gives_empty_view() {
        let h = holding_with_series("AAPL", vec![], vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::ThreeMonths);
        assert!(view.is_empty());
        assert_eq!(view.price_max, 0.0);
        assert_eq!(view.price_min, 0.0);
        assert_eq!(view.price_range, 0.0);
        assert_eq!(view.change_pct, 0.0);
        assert!(view.first_date().is_none());
        assert!(view.plot_closes(100.0, 50.0).is_empty());
    }

    #[test]
    fn windowing_does_not_mutate_holding() {
        let h = holding_with_series("AAPL", linear_series(52), vec![]);
        let before = h.clone();
        let svc = ChartService::new();
        for window in ChartWindow::ALL {
            let _ = svc.derive_chart_view(&h, window);
        }
        assert_eq!(h, before);
    }

    #[test]
    fn view_dates_and_change() {
        let h = holding_with_series("AAPL", linear_series(52), vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::ThreeMonths);
        assert_eq!(view.first_date(), Some(h.detail_series[39].date));
        assert_eq!(view.last_date(), Some(h.detail_series[51].date));
        // 139 -> 151
        assert_eq!(view.change_pct, (151.0 - 139.0) / 139.0 * 100.0);
        assert_eq!(view.current_price, 151.0);
    }

    #[test]
    fn flat_window_has_zero_range_and_midline_plot() {
        let flat: Vec<PricePoint> = linear_series(13)
            .into_iter()
            .map(|mut p| {
                p.open = 50.0;
                p.high = 50.0;
                p.low = 50.0;
                p.close = 50.0;
                p
            })
            .collect();
        let h = holding_with_series("FLAT", flat, vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::ThreeMonths);
        assert_eq!(view.price_range, 0.0);
        let plot = view.plot_closes(120.0, 80.0);
        assert_eq!(plot.len(), 13);
        assert!(plot.iter().all(|p| p.y == 40.0 && p.x.is_finite()));
        assert_eq!(plot[0].x, 0.0);
        assert_eq!(plot[12].x, 120.0);
    }

    #[test]
    fn plot_maps_max_to_top_and_min_to_bottom() {
        let h = holding_with_series("AAPL", linear_series(3), vec![]);
        let view = ChartService::new().derive_chart_view(&h, ChartWindow::ThreeMonths);
        // closes 100, 101, 102; bounds 99..103
        let plot = view.plot_closes(200.0, 100.0);
        assert_eq!(plot[0].y, 75.0);
        assert_eq!(plot[1].y, 50.0);
        assert_eq!(plot[2].y, 25.0);
        assert_eq!(plot[1].x, 100.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService — trend sparkline
// ═══════════════════════════════════════════════════════════════════

mod trend_sparkline {
    use super::*;

    #[test]
    fn upward_trend() {
        let h = holding_with_series("AAPL", vec![], vec![100.0, 90.0, 125.0]);
        let s = ChartService::new().trend_sparkline(&h).unwrap();
        assert_eq!(s.min, 90.0);
        assert_eq!(s.max, 125.0);
        assert_eq!(s.change_pct, 25.0);
        assert_eq!(s.direction, TrendDirection::Up);
        assert_eq!(s.values, h.trend_series);
    }

    #[test]
    fn downward_trend() {
        let h = holding_with_series("AAPL", vec![], vec![200.0, 150.0]);
        let s = ChartService::new().trend_sparkline(&h).unwrap();
        assert_eq!(s.change_pct, -25.0);
        assert_eq!(s.direction, TrendDirection::Down);
    }

    #[test]
    fn flat_trend() {
        let h = holding_with_series("AAPL", vec![], vec![80.0, 95.0, 80.0]);
        let s = ChartService::new().trend_sparkline(&h).unwrap();
        assert_eq!(s.change_pct, 0.0);
        assert_eq!(s.direction, TrendDirection::Flat);
    }

    #[test]
    fn empty_trend_is_none() {
        let h = holding_with_series("AAPL", vec![], vec![]);
        assert!(ChartService::new().trend_sparkline(&h).is_none());
    }

    #[test]
    fn zero_first_value_has_zero_change() {
        let h = holding_with_series("AAPL", vec![], vec![0.0, 10.0]);
        let s = ChartService::new().trend_sparkline(&h).unwrap();
        assert_eq!(s.change_pct, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioService
// ═══════════════════════════════════════════════════════════════════

mod portfolio_lookup {
    use super::*;

    fn seeded(seed: u64) -> Settings {
        Settings {
            generator: seeded_settings(seed),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_default_tickers() {
        assert!(PortfolioService::new().validate_tickers(&default_tickers()).is_ok());
    }

    #[test]
    fn validate_rejects_duplicates_case_insensitive() {
        let tickers = vec![
            TickerInfo::new("AAPL", "Apple Inc."),
            TickerInfo {
                symbol: "aapl".into(),
                display_name: "Apple again".into(),
            },
        ];
        match PortfolioService::new().validate_tickers(&tickers) {
            Err(CoreError::DuplicateSymbol(s)) => assert_eq!(s, "AAPL"),
            other => panic!("expected DuplicateSymbol, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty_symbol() {
        let tickers = vec![TickerInfo::new("", "Nameless")];
        assert!(matches!(
            PortfolioService::new().validate_tickers(&tickers),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn build_portfolio_generates_and_keeps_settings() {
        let mut rng = StdRng::seed_from_u64(5);
        let settings = seeded(5);
        let portfolio = PortfolioService::new()
            .build_portfolio(&default_tickers(), settings.clone(), &mut rng)
            .unwrap();
        assert_eq!(portfolio.len(), 10);
        assert_eq!(portfolio.settings, settings);
    }

    #[test]
    fn build_portfolio_rejects_duplicates() {
        let mut rng = StdRng::seed_from_u64(5);
        let tickers = vec![
            TickerInfo::new("AAPL", "Apple Inc."),
            TickerInfo::new("AAPL", "Apple Inc."),
        ];
        assert!(PortfolioService::new()
            .build_portfolio(&tickers, seeded(5), &mut rng)
            .is_err());
    }

    #[test]
    fn build_portfolio_rejects_invalid_settings() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut settings = seeded(5);
        settings.currency = "U$D".into();
        assert!(matches!(
            PortfolioService::new().build_portfolio(&default_tickers(), settings, &mut rng),
            Err(CoreError::InvalidSettings(_))
        ));
    }

    #[test]
    fn find_holding_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(5);
        let svc = PortfolioService::new();
        let portfolio = svc
            .build_portfolio(&default_tickers(), seeded(5), &mut rng)
            .unwrap();
        assert_eq!(svc.find_holding(&portfolio, "nvda").unwrap().symbol, "NVDA");
        assert_eq!(svc.find_holding(&portfolio, " NFLX ").unwrap().symbol, "NFLX");
        assert!(svc.find_holding(&portfolio, "IBM").is_none());
    }
}
