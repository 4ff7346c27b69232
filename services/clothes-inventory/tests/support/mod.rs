//! 测试用内存仓储

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use clothes_inventory::domain::{
    ClothesDraft, ClothesFilter, ClothesId, ClothesItem, ClothesRepository,
};
use wardrobe_errors::{AppError, AppResult};

/// 在预检查与写操作之间模拟的并发修改
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Race {
    /// 另一请求已把库存扣到 0
    Drained,
    /// 另一请求已删除该条目
    Deleted,
}

#[derive(Default)]
struct State {
    items: Vec<ClothesItem>,
    next_id: ClothesId,
}

/// 内存仓储，行为与 PostgreSQL 实现一致：
/// 更新/增库存遇到不存在的 ID 返回存储错误，条件扣减不满足时返回 `None`
#[derive(Default)]
pub struct InMemoryClothesRepository {
    state: Mutex<State>,
    failure: Option<AppError>,
    race: Option<Race>,
}

impl InMemoryClothesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有操作都返回给定错误
    pub fn failing(error: AppError) -> Self {
        Self {
            state: Mutex::new(State::default()),
            failure: Some(error),
            race: None,
        }
    }

    /// 读取照常返回，扣减库存与删除执行前先发生给定的并发修改
    pub fn racing(race: Race) -> Self {
        Self {
            race: Some(race),
            ..Self::default()
        }
    }

    pub fn stock_of(&self, id: ClothesId) -> Option<i32> {
        let state = self.state.lock().unwrap();
        state.items.iter().find(|i| i.id == id).map(|i| i.stock)
    }

    fn interfere(&self, id: ClothesId) {
        let mut state = self.state.lock().unwrap();
        match self.race {
            Some(Race::Drained) => state
                .items
                .iter_mut()
                .filter(|i| i.id == id)
                .for_each(|i| i.stock = 0),
            Some(Race::Deleted) => state.items.retain(|i| i.id != id),
            None => {}
        }
    }

    fn check(&self) -> AppResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn select(&self, predicate: impl Fn(&ClothesItem) -> bool) -> AppResult<Vec<ClothesItem>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        let mut items: Vec<_> = state.items.iter().filter(|i| predicate(i)).cloned().collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    fn modify(
        &self,
        id: ClothesId,
        apply: impl FnOnce(&mut ClothesItem),
    ) -> AppResult<ClothesItem> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::store("Record to update not found."))?;
        apply(item);
        Ok(item.clone())
    }
}

#[async_trait]
impl ClothesRepository for InMemoryClothesRepository {
    async fn find_all(&self) -> AppResult<Vec<ClothesItem>> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: ClothesId) -> AppResult<Option<ClothesItem>> {
        Ok(self.select(|i| i.id == id)?.into_iter().next())
    }

    async fn search(&self, filter: &ClothesFilter) -> AppResult<Vec<ClothesItem>> {
        self.select(|i| matches(filter, i))
    }

    async fn find_out_of_stock(&self) -> AppResult<Vec<ClothesItem>> {
        self.select(|i| i.stock == 0)
    }

    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ClothesItem>> {
        self.select(|i| i.stock < threshold)
    }

    async fn create(&self, draft: &ClothesDraft) -> AppResult<ClothesItem> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let item = to_item(state.next_id, draft);
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ClothesId, draft: &ClothesDraft) -> AppResult<ClothesItem> {
        self.modify(id, |item| *item = to_item(id, draft))
    }

    async fn increment_stock(&self, id: ClothesId, amount: i32) -> AppResult<ClothesItem> {
        self.modify(id, |item| item.stock += amount)
    }

    async fn decrement_stock(&self, id: ClothesId, amount: i32) -> AppResult<Option<ClothesItem>> {
        self.check()?;
        self.interfere(id);
        let mut state = self.state.lock().unwrap();
        Ok(state
            .items
            .iter_mut()
            .find(|i| i.id == id && i.stock >= amount)
            .map(|item| {
                item.stock -= amount;
                item.clone()
            }))
    }

    async fn delete(&self, id: ClothesId) -> AppResult<bool> {
        self.check()?;
        self.interfere(id);
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|i| i.id != id);
        Ok(state.items.len() < before)
    }
}

pub fn draft(color: &str, size: &str, price: f64, stock: i32) -> ClothesDraft {
    ClothesDraft {
        color: color.to_string(),
        size: size.to_string(),
        price,
        stock,
    }
}

/// color 与 size 都参与的精确过滤
pub fn filter(color: &str, size: &str) -> ClothesFilter {
    ClothesFilter {
        color: Some(color.to_string()),
        size: Some(size.to_string()),
    }
}

/// 与 SQL 中 `$1::text IS NULL OR color = $1` 相同的过滤语义
fn matches(filter: &ClothesFilter, item: &ClothesItem) -> bool {
    filter.color.as_deref().is_none_or(|c| c == item.color)
        && filter.size.as_deref().is_none_or(|s| s == item.size)
}

fn to_item(id: ClothesId, draft: &ClothesDraft) -> ClothesItem {
    ClothesItem {
        id,
        color: draft.color.clone(),
        size: draft.size.clone(),
        price: draft.price,
        stock: draft.stock,
    }
}
