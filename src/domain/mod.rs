// Domain layer: conversion and memory models plus the ports the adapters implement.

pub mod model;
pub mod ports;
