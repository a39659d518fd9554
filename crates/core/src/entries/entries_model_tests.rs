#[cfg(test)]
mod tests {
    use crate::entries::{DailyStats, EntryError, NewTradingEntry, TradingEntry};
    use crate::errors::{Error, ValidationError};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn new_entry(token: &str, profit_loss: Decimal) -> NewTradingEntry {
        NewTradingEntry {
            token_name: token.to_string(),
            investment_amount: None,
            profit_loss_amount: profit_loss,
            trading_date: today(),
            notes: None,
        }
    }

    fn entry(profit_loss: Decimal, investment: Option<Decimal>) -> TradingEntry {
        TradingEntry {
            id: "e-1".to_string(),
            token_name: "ABC".to_string(),
            investment_amount: investment,
            profit_loss_amount: profit_loss,
            trading_date: today(),
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 6, 14, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_accepts_entry_for_today() {
        let mut input = new_entry("ABC", dec!(50));
        input.investment_amount = Some(dec!(0.01));
        assert!(input.validate(today()).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_token() {
        let err = new_entry("   ", dec!(1)).validate(today()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "tokenName"
        ));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_validate_rejects_non_positive_investment() {
        for investment in [dec!(0), dec!(-10.5)] {
            let mut input = new_entry("ABC", dec!(1));
            input.investment_amount = Some(investment);
            let err = input.validate(today()).unwrap_err();
            assert!(matches!(err, Error::Entry(EntryError::InvalidData(_))));
        }
    }

    #[test]
    fn test_validate_rejects_past_and_future_dates() {
        for offset in [-1i64, 1, -365] {
            let mut input = new_entry("ABC", dec!(1));
            input.trading_date = today() + chrono::Duration::days(offset);
            let err = input.validate(today()).unwrap_err();
            match err {
                Error::Entry(EntryError::TradingDateNotToday { date, today: t }) => {
                    assert_eq!(date, input.trading_date);
                    assert_eq!(t, today());
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_date_error_message_is_client_facing() {
        let mut input = new_entry("ABC", dec!(1));
        input.trading_date = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
        let message = input.validate(today()).unwrap_err().to_string();
        assert!(message.starts_with("Can only add trading activities for today"));
    }

    #[test]
    fn test_normalized_trims_token_and_notes() {
        let mut input = new_entry("  BTC ", dec!(3));
        input.notes = Some("  scalped the open  ".to_string());
        let normalized = input.normalized();
        assert_eq!(normalized.token_name, "BTC");
        assert_eq!(normalized.notes.as_deref(), Some("scalped the open"));

        let mut blank = new_entry("ETH", dec!(3));
        blank.notes = Some("   ".to_string());
        assert_eq!(blank.normalized().notes, None);
    }

    #[test]
    fn test_daily_stats_is_exact_decimal_sum() {
        // 0.1 + 0.2 drifts in binary floating point; it must not here.
        let stats = DailyStats::from_amounts([dec!(0.1), dec!(0.2), dec!(-0.3)]).unwrap();
        assert_eq!(stats.total_profit_loss, Decimal::ZERO);
        assert_eq!(stats.number_of_trades, 3);

        let many = DailyStats::from_amounts(std::iter::repeat(dec!(0.01)).take(1000)).unwrap();
        assert_eq!(many.total_profit_loss, dec!(10));
        assert_eq!(many.number_of_trades, 1000);
    }

    #[test]
    fn test_daily_stats_empty() {
        let stats = DailyStats::from_amounts(Vec::<Decimal>::new()).unwrap();
        assert_eq!(stats, DailyStats::EMPTY);
        assert_eq!(DailyStats::from_entries(&[]).unwrap(), DailyStats::default());
    }

    #[test]
    fn test_daily_stats_overflow_is_an_error() {
        let result = DailyStats::from_amounts([Decimal::MAX, Decimal::MAX]);
        assert!(matches!(result, Err(Error::Unexpected(_))));
    }

    #[test]
    fn test_profit_loss_percentage() {
        assert_eq!(
            entry(dec!(25), Some(dec!(200))).profit_loss_percentage(),
            Some(dec!(12.5))
        );
        assert_eq!(
            entry(dec!(-1), Some(dec!(3))).profit_loss_percentage(),
            Some(dec!(-33.33))
        );
        assert_eq!(entry(dec!(25), None).profit_loss_percentage(), None);
    }
}
