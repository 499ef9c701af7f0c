use async_trait::async_trait;

use crate::Result;
use crate::{
    types::responses::{
        ServerTime, 
        OrderBook, 
        ExchangeInfo, 
        Trade, 
        AggregateTrade,
        Kline,
        AveragePrice,
        TickerStatistics,
        TickerPrice,
        TickerBook,
        AccountInfo,
        Order,
        SymbolCommissionRates,
        RateLimit,
        AccountTrade,
        PreventedMatch,
        Allocation,
    },
    types::requests::{
        Validated,
        AllocationSpec,
        QueryOrderSpec,
        PreventedMatchesSpec,
        OrderBookSpec,
        Ticker24HrSpec,
        RecentTradesSpec,
        KlinesSpec,
        ExchangeInfoSpec,
        HistoricalTradesSpec,
        AggregateTradesSpec,
        AveragePriceSpec,
        TickerPriceSpec,
        TickerBookSpec,
        TickerRollingWindowSpec,
        TickerTradingDaySpec,
        CommissionRatesSpec,
        OpenOrdersSpec,
        AllOrdersSpec,
        MyTradesSpec,
    }
};

/**
 * General client operations for connectivity and exchange metadata.
 */
#[async_trait]
pub trait GeneralClient {
    /**
     * Tests connectivity to the Binance API.
     * 
     * # Returns
     * - `()`: Ok if connection successful, error otherwise.
     */
    async fn ping(&self) -> Result<()>;

    /**
     * Gets the current server time from Binance.
     * 
     * # Returns
     * - `ServerTime`: Server timestamp.
     */
    async fn server_time(&self) -> Result<ServerTime>;

    /**
     * Gets exchange trading rules, rate limits, and symbol information.
     * 
     * # Arguments
     * - `specification`: Exchange info query specification.
     * 
     * # Returns
     * - `ExchangeInfo`: Exchange information.
     */
    async fn exchange_info(&self, specification: ExchangeInfoSpec<Validated>) -> Result<ExchangeInfo>;
}

/**
 * Market data operations for order books, trades, klines, and price data.
 */
#[async_trait]
pub trait MarketDataClient {
    /**
     * Gets current order book for a symbol.
     * 
     * # Arguments
     * - `specification`: Order book query specification.
     * 
     * # Returns
     * - `OrderBook`: Order book with bids and asks.
     */
    async fn order_book(&self, specification: OrderBookSpec<Validated>) -> Result<OrderBook>;

    /**
     * Gets recent trades for a symbol.
     * 
     * # Arguments
     * - `specification`: Recent trades query specification.
     * 
     * # Returns
     * - `Vec<Trade>`: Vector of recent trades.
     */
    async fn recent_trades(&self, specification: RecentTradesSpec<Validated>) -> Result<Vec<Trade>>;

    /**
     * Gets historical trades for a symbol.
     * 
     * # Arguments
     * - `specification`: Historical trades query specification.
     * 
     * # Returns
     * - `Vec<Trade>`: Vector of historical trades.
     */
    async fn historical_trades(&self, specification: HistoricalTradesSpec<Validated>) -> Result<Vec<Trade>>;

    /**
     * Gets compressed/aggregate trades for a symbol.
     * 
     * # Arguments
     * - `specification`: Aggregate trades query specification.
     * 
     * # Returns
     * - `Vec<AggregateTrade>`: Vector of aggregate trades.
     */
    async fn aggregate_trades(&self, specification: AggregateTradesSpec<Validated>) -> Result<Vec<AggregateTrade>>;

    /**
     * Gets kline/candlestick data for a symbol.
     * 
     * # Arguments
     * - `specification`: Klines query specification.
     * 
     * # Returns
     * - `Vec<Kline>`: Array of kline data.
     */
    async fn klines(&self, specification: KlinesSpec<Validated>) -> Result<Vec<Kline>>;

    /**
     * Gets UI-optimized kline/candlestick data for a symbol.
     * 
     * # Arguments
     * - `specification`: Klines query specification.
     * 
     * # Returns
     * - `Vec<Kline>`: Array of UI-optimized kline data.
     */
    async fn ui_klines(&self, specification: KlinesSpec<Validated>) -> Result<Vec<Kline>>;

    /**
     * Gets current average price for a symbol.
     * 
     * # Arguments
     * - `specification`: Average price query specification.
     * 
     * # Returns
     * - `AveragePrice`: Average price information.
     */
    async fn average_price(&self, specification: AveragePriceSpec<Validated>) -> Result<AveragePrice>;
}

/**
 * Ticker operations for current market statistics and price information.
 */
#[async_trait]
pub trait TickerClient {
    /**
     * Gets 24hr ticker price change statistics.
     * 
     * # Arguments
     * - `specification`: 24hr ticker query specification.
     * 
     * # Returns
     * - `Vec<TickerStatistics>`: Vector of ticker statistics.
     */
    async fn ticker_24hr(&self, specification: Ticker24HrSpec<Validated>) -> Result<Vec<TickerStatistics>>;

    /**
     * Gets latest price for symbol(s).
     * 
     * # Arguments
     * - `specification`: Ticker price query specification.
     * 
     * # Returns
     * - `Vec<TickerPrice>`: Vector of ticker prices.
     */
    async fn ticker_price(&self, specification: TickerPriceSpec<Validated>) -> Result<Vec<TickerPrice>>;

    /**
     * Gets best bid/ask prices for symbol(s).
     * 
     * # Arguments
     * - `specification`: Ticker book query specification.
     * 
     * # Returns
     * - `Vec<TickerBook>`: Vector of ticker book prices.
     */
    async fn ticker_book(&self, specification: TickerBookSpec<Validated>) -> Result<Vec<TickerBook>>;

    /**
     * Gets rolling window price change statistics.
     * 
     * # Arguments
     * - `specification`: Rolling window ticker query specification.
     * 
     * # Returns
     * - `Vec<TickerStatistics>`: Vector of rolling window ticker statistics.
     */
    async fn ticker_rolling_window(&self, specification: TickerRollingWindowSpec<Validated>) -> Result<Vec<TickerStatistics>>;

    /**
     * Gets trading day ticker statistics.
     * 
     * # Arguments
     * - `specification`: Trading day ticker query specification.
     * 
     * # Returns
     * - `Vec<TickerStatistics>`: Vector of trading day ticker statistics.
     */
    async fn ticker_trading_day(&self, specification: TickerTradingDaySpec<Validated>) -> Result<Vec<TickerStatistics>>;
}

/**
 * Account and trading-related client operations.
 */
#[async_trait]
pub trait AccountClient {
    /**
     * Gets current account information including balances and permissions.
     * 
     * # Returns
     * - `AccountInfo`: Account information.
     */
    async fn account_info(&self) -> Result<AccountInfo>;

    /**
     * Gets commission rates for a specific trading symbol.
     * 
     * # Arguments
     * - `specification`: Commission rates query specification.
     * 
     * # Returns
     * - `SymbolCommissionRates`: Commission rates for the symbol.
     */
    async fn commission_rates(&self, specification: CommissionRatesSpec<Validated>) -> Result<SymbolCommissionRates>;

    /**
     * Gets current unfilled order count rate limits for the account.
     * 
     * # Returns
     * - `Vec<RateLimit>`: List of rate limits.
     */
    async fn rate_limits(&self) -> Result<Vec<RateLimit>>;

    /**
     * Gets the status of a specific order.
     * 
     * # Arguments
     * - `specification`: Query order specification.
     * 
     * # Returns
     * - `Order`: Order status information.
     */
    async fn order_status(&self, specification: QueryOrderSpec<Validated>) -> Result<Order>;

    /**
     * Gets all open orders for a symbol or all symbols.
     *
     * # Arguments
     * - `specification`: Open orders query specification.
     *
     * # Returns
     * - `Vec<Order>`: List of open orders.
     */
    async fn open_orders(&self, specification: OpenOrdersSpec<Validated>) -> Result<Vec<Order>>;

    /**
     * Gets all account orders (active, canceled, or filled) for a symbol.
     *
     * # Arguments
     * - `specification`: All orders query specification.
     *
     * # Returns
     * - `Vec<Order>`: List of all orders for the symbol.
     */
    async fn all_orders(&self, specification: AllOrdersSpec<Validated>) -> Result<Vec<Order>>;

    /**
     * Gets trade history for a specific account and symbol.
     *
     * # Arguments
     * - `specification`: My trades query specification.
     *
     * # Returns
     * - `Vec<AccountTrade>`: List of trades for the account.
     */
    async fn my_trades(&self, specification: MyTradesSpec<Validated>) -> Result<Vec<AccountTrade>>;

    /**
     * Gets prevented matches for orders expired due to STP.
     *
     * # Arguments
     * - `specification`: Prevented matches query specification.
     *
     * # Returns
     * - `Vec<PreventedMatch>`: List of prevented matches.
     */
    async fn prevented_matches(&self, specification: PreventedMatchesSpec<Validated>) -> Result<Vec<PreventedMatch>>;

    /**
     * Gets account allocations resulting from Smart Order Routing.
     *
     * # Arguments
     * - `specification`: Allocation query specification.
     *
     * # Returns
     * - `Vec<Allocation>`: List of allocations.
     */
    async fn allocations(&self, specification: AllocationSpec<Validated>) -> Result<Vec<Allocation>>;
}

/**
 * Main client trait that combines all Binance API functionality.
 */
pub trait BinanceSpotClient: GeneralClient + MarketDataClient + TickerClient + AccountClient {}

/**
 * Blanket implementation of BinanceClient for any type that implements all component traits.
 */
impl<T> BinanceSpotClient for T where T: GeneralClient + MarketDataClient + TickerClient + AccountClient {}