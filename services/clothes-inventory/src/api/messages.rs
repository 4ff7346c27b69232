//! 对外返回的本地化消息（印尼语）

pub const GREETING: &str = "Sagara Tech Test Interview";

pub const NOT_FOUND: &str = "Baju tidak ditemukan";
pub const INSUFFICIENT_STOCK: &str = "Stok tidak mencukupi untuk pengurangan";

pub const LIST_OK: &str = "Daftar semua baju berhasil diambil";
pub const LIST_FAILED: &str = "Gagal mengambil daftar baju";

pub const CREATE_OK: &str = "Baju berhasil ditambahkan";
pub const CREATE_FAILED: &str = "Gagal menambahkan baju";

pub const SEARCH_OK: &str = "Pencarian baju berhasil";
pub const SEARCH_FAILED: &str = "Gagal mencari baju";

pub const UPDATE_OK: &str = "Data baju berhasil diperbarui";
pub const UPDATE_FAILED: &str = "Gagal memperbarui data baju";

pub const ADD_STOCK_OK: &str = "Stok baju berhasil ditambahkan";
pub const ADD_STOCK_FAILED: &str = "Gagal menambahkan stok baju";

pub const REDUCE_STOCK_OK: &str = "Stok baju berhasil dikurangi";
pub const REDUCE_STOCK_FAILED: &str = "Gagal mengurangi stok baju";

pub const OUT_OF_STOCK_OK: &str = "Daftar baju yang habis stok berhasil diambil";
pub const OUT_OF_STOCK_FAILED: &str = "Gagal mengambil daftar baju yang habis stok";

pub const LOW_STOCK_OK: &str = "Daftar baju dengan stok kurang dari 5 berhasil diambil";
pub const LOW_STOCK_FAILED: &str = "Gagal mengambil daftar baju dengan stok kurang dari 5";

pub const DELETE_OK: &str = "Baju berhasil dihapus";
pub const DELETE_FAILED: &str = "Gagal menghapus baju";
