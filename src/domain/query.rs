use chrono::{DateTime, Utc};

use super::{Booking, BookingStatus, UnsupportedState, UserId};

/// 一覧取得用の state フィルタ（永続化しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for BookingState {
    type Err = UnsupportedState;

    /// 大文字小文字を区別しない
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(UnsupportedState(s.to_string())),
        }
    }
}

/// ユーザーと予約の関係
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// ユーザーが予約者である予約
    Booker,
    /// ユーザーが所有するアイテムへの予約
    Owner,
}

/// 予約期間に対する時刻フィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Any,
    /// start <= now < end
    Current(DateTime<Utc>),
    /// end < now
    Past(DateTime<Utc>),
    /// start > now
    Future(DateTime<Utc>),
}

impl TimeFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        match *self {
            TimeFilter::Any => true,
            TimeFilter::Current(now) => booking.start <= now && now < booking.end,
            TimeFilter::Past(now) => booking.end < now,
            TimeFilter::Future(now) => booking.start > now,
        }
    }
}

/// 予約一覧の検索条件
///
/// state ごとに個別のクエリを書く代わりに、リポジトリはこの記述子ひとつを
/// 受け取る。結果は常に start の降順。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingQuery {
    pub user_id: UserId,
    pub relation: Relation,
    pub time: TimeFilter,
    pub status: Option<BookingStatus>,
}

impl BookingQuery {
    /// state フィルタから検索条件を組み立てる
    ///
    /// - FUTURE は所有者側の一覧でのみ APPROVED に絞る
    /// - WAITING は開始前の WAITING 予約
    pub fn for_state(
        user_id: UserId,
        relation: Relation,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Self {
        let (time, status) = match state {
            BookingState::All => (TimeFilter::Any, None),
            BookingState::Current => (TimeFilter::Current(now), None),
            BookingState::Past => (TimeFilter::Past(now), None),
            BookingState::Future => match relation {
                Relation::Booker => (TimeFilter::Future(now), None),
                Relation::Owner => (TimeFilter::Future(now), Some(BookingStatus::Approved)),
            },
            BookingState::Waiting => (TimeFilter::Future(now), Some(BookingStatus::Waiting)),
            BookingState::Rejected => (TimeFilter::Any, Some(BookingStatus::Rejected)),
        };

        Self {
            user_id,
            relation,
            time,
            status,
        }
    }

    /// メモリ上で条件を評価する
    ///
    /// `item_owner` は予約対象アイテムの所有者。
    pub fn matches(&self, booking: &Booking, item_owner: UserId) -> bool {
        let subject = match self.relation {
            Relation::Booker => booking.booker_id,
            Relation::Owner => item_owner,
        };

        subject == self.user_id
            && self.time.matches(booking)
            && self.status.is_none_or(|status| booking.status == status)
    }
}
