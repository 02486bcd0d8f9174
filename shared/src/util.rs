/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 将元转换为分 (四舍五入)
///
/// Admin input arrives in currency units; everything downstream is
/// integer cents.
pub fn to_cents(units: f64) -> i64 {
    (units * 100.0).round() as i64
}

// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;
const TS_MASK: i64 = 0x1FF_FFFF_FFFF; // 41 bits
const SEQ_BITS: i64 = 12;
const SEQ_MASK: i64 = 0xFFF;

/// Snowflake-style i64 generator for resource IDs.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: per-generator sequence (4096 ids per millisecond)
///
/// The low word is a sequence rather than a random draw, so ids from
/// one generator are strictly unique no matter how rapidly they are
/// requested. When a millisecond exhausts its 4096 slots the timestamp
/// is borrowed forward by one; the same carry covers a clock that
/// briefly steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last_ms: i64,
    seq: i64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id. Never yields the same value twice for one generator.
    pub fn next_id(&mut self) -> i64 {
        let ms = (now_millis() - EPOCH_MS) & TS_MASK;
        if ms > self.last_ms {
            self.last_ms = ms;
            self.seq = 0;
        } else {
            self.seq += 1;
            if self.seq > SEQ_MASK {
                self.last_ms += 1;
                self.seq = 0;
            }
        }
        (self.last_ms << SEQ_BITS) | self.seq
    }
}

/// Generate a human-readable order number: `ORD-YYYYMMDD-HHMM-XXXX`,
/// where `XXXX` is a zero-padded random 4-digit suffix.
pub fn order_number() -> String {
    use rand::Rng;
    let now = chrono::Utc::now();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("ORD-{}-{:04}", now.format("%Y%m%d-%H%M"), suffix)
}
