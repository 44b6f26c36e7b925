mod aead;
mod word;
